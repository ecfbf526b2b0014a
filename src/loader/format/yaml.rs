/* src/loader/format/yaml.rs */

use super::super::{FmtError, Format};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// YAML format using `serde_yaml`.
pub struct Yaml;

impl Format for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, FmtError> {
		serde_yaml::from_slice(input).map_err(|e| FmtError::ParseError(e.to_string()))
	}

	fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, FmtError> {
		serde_yaml::to_string(value)
			.map(String::into_bytes)
			.map_err(|e| FmtError::SerializeError(e.to_string()))
	}
}
