/* src/loader/format/json.rs */

use super::super::{FmtError, Format};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// JSON format using `serde_json`. Output is pretty-printed.
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, FmtError> {
		serde_json::from_slice(input).map_err(|e| FmtError::ParseError(e.to_string()))
	}

	fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, FmtError> {
		serde_json::to_vec_pretty(value).map_err(|e| FmtError::SerializeError(e.to_string()))
	}
}
