/* src/loader/format/toml.rs */

use super::super::{FmtError, Format};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// TOML format using `toml`.
pub struct Toml;

impl Format for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, FmtError> {
		let s = std::str::from_utf8(input).map_err(|e| FmtError::ParseError(e.to_string()))?;
		toml::from_str(s).map_err(|e| FmtError::ParseError(e.to_string()))
	}

	fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, FmtError> {
		toml::to_string(value)
			.map(String::into_bytes)
			.map_err(|e| FmtError::SerializeError(e.to_string()))
	}
}
