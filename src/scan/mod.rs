/* src/scan/mod.rs */

//!
//! Loading every configuration of a directory tree.
//!
//! [`ConfigDir`] walks a directory, keeps the files whose relative path
//! matches an optional [`PathPattern`], and loads them through a
//! [`DynLoader`]. The loader's source must be rooted at the scanned
//! directory, since keys are paths relative to it.

mod error;
mod pattern;

pub use error::ScanError;
pub use pattern::{PathPattern, ScanMode, ScanResult};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;

#[cfg(feature = "logging")]
use log::{debug, warn};

use crate::loader::{DynLoader, LoadResult};

/// A directory of configuration files.
#[derive(Debug, Clone)]
pub struct ConfigDir {
	loader: Arc<DynLoader>,
	path: PathBuf,
	pattern: Option<PathPattern>,
	scan_mode: ScanMode,
	max_entries: Option<usize>,
}

/// Builder for ConfigDir.
#[derive(Debug, Default)]
pub struct ConfigDirBuilder {
	loader: Option<Arc<DynLoader>>,
	path: Option<PathBuf>,
	pattern: Option<String>,
	scan_mode: ScanMode,
	max_entries: Option<usize>,
}

impl ConfigDirBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn loader(mut self, loader: impl Into<Arc<DynLoader>>) -> Self {
		self.loader = Some(loader.into());
		self
	}

	pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = Some(path.into());
		self
	}

	/// Regular expression the relative path must match (anchored at the start).
	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	pub fn scan_mode(mut self, mode: ScanMode) -> Self {
		self.scan_mode = mode;
		self
	}

	/// Set maximum number of files to consider.
	/// If exceeded, returns an error during scan.
	pub fn max_entries(mut self, max: usize) -> Self {
		self.max_entries = Some(max);
		self
	}

	pub fn build(self) -> Result<ConfigDir, ScanError> {
		let loader = self
			.loader
			.ok_or_else(|| ScanError::Builder("loader is required".to_string()))?;
		let path = self
			.path
			.ok_or_else(|| ScanError::Builder("path is required".to_string()))?;
		let pattern = self.pattern.as_deref().map(PathPattern::new).transpose()?;

		Ok(ConfigDir {
			loader,
			path,
			pattern,
			scan_mode: self.scan_mode,
			max_entries: self.max_entries,
		})
	}
}

impl ConfigDir {
	/// Creates a recursive, unfiltered scanner.
	pub fn new(loader: DynLoader, path: impl Into<PathBuf>) -> Self {
		Self {
			loader: Arc::new(loader),
			path: path.into(),
			pattern: None,
			scan_mode: ScanMode::default(),
			max_entries: None,
		}
	}

	pub fn builder() -> ConfigDirBuilder {
		ConfigDirBuilder::new()
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Scans the directory and loads every matching configuration.
	///
	/// A missing directory yields an empty result. Files that fail to load
	/// are reported in [`ScanResult::failed`] and do not abort the scan.
	pub async fn load(&self) -> Result<ScanResult, ScanError> {
		let mut result = ScanResult::default();

		if !fs::try_exists(&self.path).await.unwrap_or(false) {
			return Ok(result);
		}

		let keys = self.collect_keys().await?;

		#[cfg(feature = "logging")]
		debug!("Scanning {} candidate files in {:?}", keys.len(), self.path);

		for key in keys {
			match self.loader.load_file(&key).await {
				LoadResult::Ok { value, .. } => result.loaded.push((key, value)),
				LoadResult::Invalid(e) => {
					#[cfg(feature = "logging")]
					warn!("Failed to load '{}': {}", key, e);
					result.failed.push((key, e.to_string()));
				}
				LoadResult::NotFound => result.ignored.push(key),
			}
		}

		Ok(result)
	}

	/// Walks the directory and returns the sorted relative paths of the
	/// files matching the pattern. Hidden files and directories are skipped.
	async fn collect_keys(&self) -> Result<Vec<String>, ScanError> {
		let mut keys = Vec::new();
		let mut seen = 0usize;
		let mut pending = vec![(self.path.clone(), String::new())];

		while let Some((dir, prefix)) = pending.pop() {
			let mut entries = fs::read_dir(&dir).await?;
			while let Some(entry) = entries.next_entry().await? {
				let file_name = entry.file_name();
				let name = file_name.to_string_lossy();

				if name.starts_with('.') {
					continue;
				}

				let key = format!("{}{}", prefix, name);
				let file_type = entry.file_type().await?;

				if file_type.is_dir() {
					if self.scan_mode == ScanMode::Recursive {
						pending.push((entry.path(), format!("{}/", key)));
					}
					continue;
				}
				if !file_type.is_file() {
					continue;
				}

				if let Some(max) = self.max_entries
					&& seen >= max
				{
					return Err(ScanError::LimitExceeded(format!(
						"directory contains more than {} files",
						max
					)));
				}
				seen += 1;

				let matches = match &self.pattern {
					Some(pattern) => pattern.is_match(&key)?,
					None => true,
				};
				if matches {
					keys.push(key);
				}
			}
		}

		keys.sort();
		Ok(keys)
	}
}
