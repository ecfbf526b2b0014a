/* src/loader/mod.rs */

//!
//! Format-agnostic reading and writing of configuration trees.
//!
//! - [`Format`] turns bytes into a [`ConfigEntry`] and back (`json`, `toml`, `yaml`).
//! - [`Source`] retrieves and stores raw bytes by key ([`MemorySource`], [`FileSource`]).
//! - [`DynLoader`] picks the format from the file extension and can verify
//!   constructors against a [`Registry`](crate::Registry).

pub mod error;
pub mod format;
pub mod impls;
pub mod source;

pub use error::FmtError;
pub use format::AnyFormat;
pub use impls::{DynLoader, DynLoaderBuilder};
pub use source::MemorySource;

#[cfg(feature = "fs")]
pub use source::FileSource;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::tree::ConfigEntry;

/// Where a configuration was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadInfo {
	/// Key within the source.
	pub path: PathBuf,
	/// First extension of the format used.
	pub format: &'static str,
}

/// Result of a loading operation.
#[derive(Debug)]
pub enum LoadResult {
	/// Successfully loaded and parsed.
	Ok { value: ConfigEntry, info: LoadInfo },
	/// Resource not found at the given key.
	NotFound,
	/// Resource exists but is invalid.
	Invalid(FmtError),
}

impl LoadResult {
	/// Collapses the three outcomes into a `Result`.
	pub fn into_result(self) -> Result<(ConfigEntry, LoadInfo), FmtError> {
		match self {
			Self::Ok { value, info } => Ok((value, info)),
			Self::NotFound => Err(FmtError::NotFound),
			Self::Invalid(e) => Err(e),
		}
	}

	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok { .. })
	}
}

/// Abstract format that converts bytes into a structured object and back.
pub trait Format: Send + Sync {
	/// List of supported extensions or identifiers.
	fn extensions(&self) -> &'static [&'static str];

	/// Parse the raw bytes into the target type.
	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, FmtError>;

	/// Serialize a value into raw bytes.
	fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, FmtError>;
}

/// Abstract data store addressed by key.
#[async_trait]
pub trait Source: Send + Sync {
	/// Read raw data as a vector of bytes.
	async fn read(&self, key: &str) -> Result<Vec<u8>, FmtError>;

	/// Check if the resource exists at the given key.
	async fn exists(&self, key: &str) -> bool;

	/// Store raw data under the given key, replacing previous content.
	async fn write(&self, key: &str, data: Vec<u8>) -> Result<(), FmtError>;
}
