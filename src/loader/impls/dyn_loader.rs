/* src/loader/impls/dyn_loader.rs */

use super::super::{FmtError, Format, LoadInfo, LoadResult, Source, format::AnyFormat};
use crate::registry::Registry;
use crate::tree::ConfigEntry;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "logging")]
use log::{debug, warn};

/// Loads and saves configuration trees, selecting the format by extension.
pub struct DynLoader {
	source: Box<dyn Source>,
	formats: Vec<AnyFormat>,
	registry: Option<Arc<Registry>>,
}

pub struct DynLoaderBuilder {
	source: Option<Box<dyn Source>>,
	formats: Vec<AnyFormat>,
	registry: Option<Arc<Registry>>,
}

impl DynLoaderBuilder {
	pub fn new() -> Self {
		Self {
			source: None,
			formats: Vec::new(),
			registry: None,
		}
	}

	pub fn source(mut self, source: impl Source + 'static) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Registers a format. Probing follows registration order.
	pub fn format(mut self, format: AnyFormat) -> Self {
		self.formats.push(format);
		self
	}

	/// Registers every format compiled into this build.
	pub fn all_formats(mut self) -> Self {
		self.formats.extend(AnyFormat::enabled());
		self
	}

	/// Verify every loaded tree against `registry`.
	pub fn registry(mut self, registry: impl Into<Arc<Registry>>) -> Self {
		self.registry = Some(registry.into());
		self
	}

	pub fn build(self) -> Result<DynLoader, &'static str> {
		let source = self.source.ok_or("source is required")?;
		if self.formats.is_empty() {
			return Err("at least one format is required");
		}
		Ok(DynLoader {
			source,
			formats: self.formats,
			registry: self.registry,
		})
	}
}

impl Default for DynLoaderBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DynLoader {
	pub fn new(source: Box<dyn Source>, formats: Vec<AnyFormat>) -> Self {
		Self {
			source,
			formats,
			registry: None,
		}
	}

	pub fn builder() -> DynLoaderBuilder {
		DynLoaderBuilder::new()
	}

	pub fn formats(&self) -> &[AnyFormat] {
		&self.formats
	}

	pub fn registry(&self) -> Option<&Registry> {
		self.registry.as_deref()
	}

	/// Probes `base_name.<ext>` for every registered extension; the first hit wins.
	pub async fn load(&self, base_name: &str) -> LoadResult {
		let mut found = None;

		for format in &self.formats {
			for ext in format.extensions() {
				let key = format!("{}.{}", base_name, ext);
				if self.source.exists(&key).await {
					#[cfg(feature = "logging")]
					{
						if let Some((ref first_key, _)) = found {
							warn!(
								"Conflict detected: multiple configuration files found for '{}'. Using '{}', ignoring '{}'.",
								base_name, first_key, key
							);
							continue;
						}
					}

					if found.is_none() {
						found = Some((key, *format));
						#[cfg(not(feature = "logging"))]
						break;
					}
				}
			}
			#[cfg(not(feature = "logging"))]
			if found.is_some() {
				break;
			}
		}

		if let Some((key, format)) = found {
			self.load_explicit(&key, &format).await
		} else {
			LoadResult::NotFound
		}
	}

	/// Directly loads a specific path, selecting parser by extension.
	pub async fn load_file(&self, path: &str) -> LoadResult {
		let format = match self.format_for(path) {
			Ok(Some(format)) => format,
			Ok(None) => return LoadResult::NotFound,
			Err(e) => return LoadResult::Invalid(e),
		};
		self.load_explicit(path, &format).await
	}

	/// Serializes `entry` with the format matching the extension of `path`
	/// and writes it to the source.
	pub async fn save(&self, path: &str, entry: &ConfigEntry) -> Result<LoadInfo, FmtError> {
		let format = self
			.format_for(path)?
			.ok_or(FmtError::Custom("no format registered for extension"))?;

		let bytes = format.serialize(entry)?;
		self.source.write(path, bytes).await?;

		#[cfg(feature = "logging")]
		debug!("Saved '{}' to '{}'", entry.name(), path);

		Ok(LoadInfo {
			path: PathBuf::from(path),
			format: format_name(&format),
		})
	}

	/// Dry-run mode, validates without returning data.
	pub async fn validate(&self, base_name: &str) -> Result<(), FmtError> {
		self.load(base_name).await.into_result().map(|_| ())
	}

	fn format_for(&self, path: &str) -> Result<Option<AnyFormat>, FmtError> {
		let ext = match path.rfind('.') {
			Some(idx) => &path[idx + 1..],
			None => return Err(FmtError::ParseError("missing extension".to_string())),
		};
		Ok(self
			.formats
			.iter()
			.find(|format| format.extensions().contains(&ext))
			.copied())
	}

	/// Loads the configuration using a specific key and format.
	async fn load_explicit(&self, key: &str, format: &AnyFormat) -> LoadResult {
		let bytes = match self.source.read(key).await {
			Ok(b) => b,
			Err(FmtError::NotFound) => return LoadResult::NotFound,
			Err(e) => return LoadResult::Invalid(e),
		};

		let value = match format.parse::<ConfigEntry>(&bytes) {
			Ok(value) => value,
			Err(e) => return LoadResult::Invalid(e),
		};

		if let Some(registry) = &self.registry
			&& let Err(e) = registry.verify(&value)
		{
			return LoadResult::Invalid(e.into());
		}

		#[cfg(feature = "logging")]
		debug!("Loaded '{}' from '{}'", value.name(), key);

		LoadResult::Ok {
			value,
			info: LoadInfo {
				path: PathBuf::from(key),
				format: format_name(format),
			},
		}
	}
}

fn format_name(format: &AnyFormat) -> &'static str {
	format.extensions().first().copied().unwrap_or("unknown")
}

impl std::fmt::Debug for DynLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DynLoader")
			.field("formats", &self.formats)
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}
