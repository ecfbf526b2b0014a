/* src/loader/error.rs */

use crate::registry::BuildError;

/// Core error type for the loader module.
#[derive(Debug, thiserror::Error)]
pub enum FmtError {
	/// Parsing error from format implementation.
	#[error("parse error: {0}")]
	ParseError(String),

	/// Serialization error from format implementation.
	#[error("serialize error: {0}")]
	SerializeError(String),

	/// Resource not found.
	#[error("not found")]
	NotFound,

	/// The parsed tree references a constructor the registry does not know.
	#[error("constructor error: {0}")]
	Constructor(#[from] BuildError),

	/// Generic static error message.
	#[error("custom error: {0}")]
	Custom(&'static str),

	/// IO error from source.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Sandbox violation in file system source.
	#[cfg(feature = "fs")]
	#[error("sandbox violation")]
	SandboxViolation,
}
