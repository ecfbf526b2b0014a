/* src/loader/format/mod.rs */

use super::{FmtError, Format};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// An enum wrapper for all supported formats, enabling dynamic dispatch-like behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl AnyFormat {
	/// Every format compiled into this build.
	pub fn enabled() -> Vec<AnyFormat> {
		#[allow(unused_mut)]
		let mut formats = Vec::new();
		#[cfg(feature = "json")]
		formats.push(Self::Json);
		#[cfg(feature = "toml")]
		formats.push(Self::Toml);
		#[cfg(feature = "yaml")]
		formats.push(Self::Yaml);
		formats
	}

	/// Finds the enabled format handling `ext` (without the leading dot).
	pub fn from_extension(ext: &str) -> Option<AnyFormat> {
		Self::enabled()
			.into_iter()
			.find(|format| format.extensions().contains(&ext))
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.extensions(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.extensions(),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.extensions(),
			#[cfg(not(any(feature = "json", feature = "toml", feature = "yaml")))]
			_ => unreachable!(),
		}
	}

	fn parse<T: DeserializeOwned>(&self, _input: &[u8]) -> Result<T, FmtError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.parse(_input),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.parse(_input),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.parse(_input),
			#[cfg(not(any(feature = "json", feature = "toml", feature = "yaml")))]
			_ => unreachable!(),
		}
	}

	fn serialize<T: Serialize>(&self, _value: &T) -> Result<Vec<u8>, FmtError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.serialize(_value),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.serialize(_value),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.serialize(_value),
			#[cfg(not(any(feature = "json", feature = "toml", feature = "yaml")))]
			_ => unreachable!(),
		}
	}
}
