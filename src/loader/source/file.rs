/* src/loader/source/file.rs */

use super::super::{FmtError, Source};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// A file system source backed by tokio::fs, confined to a root directory.
#[derive(Debug, Clone)]
pub struct FileSource {
	root: PathBuf,
}

impl FileSource {
	/// Create a new FileSource rooted at the given path.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Rejects keys that try to leave the root lexically.
	fn check_key(key: &str) -> Result<(), FmtError> {
		for component in Path::new(key).components() {
			if matches!(
				component,
				Component::ParentDir | Component::RootDir | Component::Prefix(_)
			) {
				return Err(FmtError::SandboxViolation);
			}
		}
		Ok(())
	}

	/// Resolves the path safely, ensuring it is within the root directory.
	async fn resolve_secure(&self, key: &str) -> Result<PathBuf, FmtError> {
		Self::check_key(key)?;
		let path = self.root.join(key);

		// Resolve root to absolute path
		let canonical_root = fs::canonicalize(&self.root).await.map_err(FmtError::Io)?;

		// Resolve target path
		match fs::canonicalize(&path).await {
			Ok(canonical_path) => {
				if canonical_path.starts_with(&canonical_root) {
					Ok(canonical_path)
				} else {
					Err(FmtError::SandboxViolation)
				}
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FmtError::NotFound),
			Err(e) => Err(FmtError::Io(e)),
		}
	}

	/// Resolves a path that may not exist yet. Its parent directory is
	/// created and must resolve inside the root.
	async fn resolve_for_write(&self, key: &str) -> Result<PathBuf, FmtError> {
		Self::check_key(key)?;
		let path = self.root.join(key);
		let file_name = path
			.file_name()
			.ok_or(FmtError::Custom("key does not name a file"))?
			.to_owned();

		let canonical_root = fs::canonicalize(&self.root).await.map_err(FmtError::Io)?;

		let parent = path.parent().unwrap_or(&self.root);
		fs::create_dir_all(parent).await?;
		let canonical_parent = fs::canonicalize(parent).await?;
		if !canonical_parent.starts_with(&canonical_root) {
			return Err(FmtError::SandboxViolation);
		}

		Ok(canonical_parent.join(file_name))
	}
}

#[async_trait]
impl Source for FileSource {
	async fn read(&self, key: &str) -> Result<Vec<u8>, FmtError> {
		let path = self.resolve_secure(key).await?;
		fs::read(path).await.map_err(FmtError::Io)
	}

	async fn exists(&self, key: &str) -> bool {
		self.resolve_secure(key).await.is_ok()
	}

	async fn write(&self, key: &str, data: Vec<u8>) -> Result<(), FmtError> {
		let path = self.resolve_for_write(key).await?;
		fs::write(path, data).await.map_err(FmtError::Io)
	}
}
