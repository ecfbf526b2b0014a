/* src/registry/mod.rs */

//!
//! Rebuilding objects from configuration trees.
//!
//! A [`Registry`] maps constructor names to factories. Building an entry
//! looks up the factory registered under the entry name and hands it the
//! stored arguments; nested entries are built through the same registry.
//!
//! ```
//! use confmgr::{ConfigEntry, Registry};
//!
//! struct Point { x: i64, y: i64 }
//!
//! let registry = Registry::new().with("Point", |args| {
//!     Ok(Point { x: args.get("x")?, y: args.get_or("y", 0)? })
//! });
//!
//! let p: Point = registry.build(&ConfigEntry::new("Point").arg("x", 3)).unwrap();
//! assert_eq!((p.x, p.y), (3, 0));
//! ```

mod args;
mod error;

pub use args::{BuildArgs, FromArgument};
pub use error::BuildError;

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use crate::tree::ConfigEntry;

/// Type-erased factory stored in a [`Registry`].
pub type FactoryFn =
	Arc<dyn Fn(&BuildArgs<'_>) -> Result<Box<dyn Any + Send>, BuildError> + Send + Sync>;

/// Constructor name to factory mapping.
#[derive(Clone, Default)]
pub struct Registry {
	factories: HashMap<String, FactoryFn>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `factory` under `name`, replacing any previous one.
	pub fn register<T, F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
	where
		T: Any + Send,
		F: Fn(&BuildArgs<'_>) -> Result<T, BuildError> + Send + Sync + 'static,
	{
		let erased: FactoryFn = Arc::new(move |args: &BuildArgs<'_>| {
			factory(args).map(|value| Box::new(value) as Box<dyn Any + Send>)
		});
		self.factories.insert(name.into(), erased);
		self
	}

	/// Builder-style [`register`](Self::register).
	pub fn with<T, F>(mut self, name: impl Into<String>, factory: F) -> Self
	where
		T: Any + Send,
		F: Fn(&BuildArgs<'_>) -> Result<T, BuildError> + Send + Sync + 'static,
	{
		self.register(name, factory);
		self
	}

	pub fn contains(&self, name: &str) -> bool {
		self.factories.contains_key(name)
	}

	/// Registered constructor names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.factories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}

	/// Invokes the factory registered for `entry` and returns its product.
	pub fn build_any(&self, entry: &ConfigEntry) -> Result<Box<dyn Any + Send>, BuildError> {
		let factory = self
			.factories
			.get(entry.name())
			.ok_or_else(|| BuildError::UnknownConstructor {
				name: entry.name().to_string(),
			})?;
		factory(&BuildArgs {
			registry: self,
			entry,
		})
	}

	/// Builds `entry` and downcasts the product to `T`.
	pub fn build<T: Any>(&self, entry: &ConfigEntry) -> Result<T, BuildError> {
		self.build_any(entry)?
			.downcast::<T>()
			.map(|value| *value)
			.map_err(|_| BuildError::TypeMismatch {
				constructor: entry.name().to_string(),
				expected: type_name::<T>(),
			})
	}

	/// Checks that every constructor referenced by `entry`, nested ones
	/// included, is registered. Reports the first unknown name found.
	pub fn verify(&self, entry: &ConfigEntry) -> Result<(), BuildError> {
		let mut unknown = None;
		entry.walk(&mut |e| {
			if unknown.is_none() && !self.contains(e.name()) {
				unknown = Some(e.name().to_string());
			}
		});
		match unknown {
			Some(name) => Err(BuildError::UnknownConstructor { name }),
			None => Ok(()),
		}
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("constructors", &self.names())
			.finish()
	}
}
