/* src/scan/pattern.rs */

//!
//! Path filters and result types for directory scanning.

use fancy_regex::Regex;

use super::ScanError;
use crate::tree::ConfigEntry;

/// Result of a directory scan operation.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
	/// Successfully loaded configurations keyed by relative path, sorted by key.
	pub loaded: Vec<(String, ConfigEntry)>,
	/// Keys that failed to load, with the error message.
	pub failed: Vec<(String, String)>,
	/// Keys matching the pattern but without a registered format.
	pub ignored: Vec<String>,
}

impl ScanResult {
	/// Returns an iterator over the loaded keys.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.loaded.iter().map(|(k, _)| k.as_str())
	}

	pub fn is_clean(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Defines how deep to scan within the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
	/// Descend into every non-hidden subdirectory.
	#[default]
	Recursive,
	/// Scan only files directly in the directory.
	Flat,
}

/// Regular expression matched against relative paths.
///
/// Paths use `/` separators and the match is anchored at the start of the
/// path only, so `conf_.*` accepts `conf_1.toml` but not `old/conf_1.toml`.
#[derive(Debug, Clone)]
pub struct PathPattern {
	source: String,
	regex: Regex,
}

impl PathPattern {
	pub fn new(pattern: &str) -> Result<Self, ScanError> {
		let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(Box::new)?;
		Ok(Self {
			source: pattern.to_string(),
			regex,
		})
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub fn is_match(&self, path: &str) -> Result<bool, ScanError> {
		self.regex.is_match(path).map_err(|e| ScanError::Pattern(Box::new(e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pattern_anchored_at_start() {
		let pattern = PathPattern::new(r"conf_.*\.toml").unwrap();
		assert!(pattern.is_match("conf_1.toml").unwrap());
		assert!(!pattern.is_match("old/conf_1.toml").unwrap());
		// Only the start is anchored.
		assert!(pattern.is_match("conf_1.toml.bak").unwrap());
	}

	#[test]
	fn test_pattern_with_directories() {
		let pattern = PathPattern::new(r"runs/[0-9]+/.*").unwrap();
		assert!(pattern.is_match("runs/12/config.json").unwrap());
		assert!(!pattern.is_match("runs/x/config.json").unwrap());
	}

	#[test]
	fn test_invalid_pattern() {
		assert!(matches!(PathPattern::new("("), Err(ScanError::Pattern(_))));
	}
}
