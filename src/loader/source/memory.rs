/* src/loader/source/memory.rs */

use super::super::{FmtError, Source};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// A simple in-memory source useful for testing and embedded environments.
#[derive(Debug, Default)]
pub struct MemorySource {
	data: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemorySource {
	/// Creates a new empty MemorySource.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts data into the source.
	pub fn insert(&mut self, key: &str, value: Vec<u8>) {
		self.data
			.get_mut()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.insert(key.to_string(), value);
	}

	/// Returns a copy of the data stored under `key`.
	pub fn get(&self, key: &str) -> Option<Vec<u8>> {
		self.lock().get(key).cloned()
	}

	/// Stored keys, sorted.
	pub fn keys(&self) -> Vec<String> {
		self.lock().keys().cloned().collect()
	}

	fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
		// The map stays consistent even if a writer panicked.
		self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

#[async_trait]
impl Source for MemorySource {
	async fn read(&self, key: &str) -> Result<Vec<u8>, FmtError> {
		self.get(key).ok_or(FmtError::NotFound)
	}

	async fn exists(&self, key: &str) -> bool {
		self.lock().contains_key(key)
	}

	async fn write(&self, key: &str, data: Vec<u8>) -> Result<(), FmtError> {
		self.lock().insert(key.to_string(), data);
		Ok(())
	}
}
