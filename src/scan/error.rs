/* src/scan/error.rs */

use thiserror::Error;

/// Errors that can occur while scanning a configuration directory.
#[derive(Debug, Error)]
pub enum ScanError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Pattern error: {0}")]
	Pattern(#[from] Box<fancy_regex::Error>),

	#[error("Entry limit exceeded: {0}")]
	LimitExceeded(String),

	#[error("Builder error: {0}")]
	Builder(String),
}
