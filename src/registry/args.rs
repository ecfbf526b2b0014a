/* src/registry/args.rs */

use std::any::Any;

use super::{BuildError, Registry};
use crate::tree::{ArgumentValue, ConfigEntry};

/// Conversion from a stored argument value into a factory parameter.
pub trait FromArgument: Sized {
	/// Kind name reported when the conversion fails.
	const EXPECTED: &'static str;

	fn from_argument(value: &ArgumentValue) -> Option<Self>;
}

impl FromArgument for bool {
	const EXPECTED: &'static str = "boolean";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_bool()
	}
}

impl FromArgument for i64 {
	const EXPECTED: &'static str = "integer";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_i64()
	}
}

macro_rules! int_from_argument {
	($($ty:ty),*) => {
		$(
			impl FromArgument for $ty {
				const EXPECTED: &'static str = concat!("integer within ", stringify!($ty));

				fn from_argument(value: &ArgumentValue) -> Option<Self> {
					value.as_i64().and_then(|i| <$ty>::try_from(i).ok())
				}
			}
		)*
	};
}

int_from_argument!(i32, u32, usize);

impl FromArgument for u64 {
	const EXPECTED: &'static str = "integer within u64";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_u64()
	}
}

impl FromArgument for f64 {
	const EXPECTED: &'static str = "number";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_f64()
	}
}

impl FromArgument for String {
	const EXPECTED: &'static str = "string";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_str().map(str::to_owned)
	}
}

impl FromArgument for ArgumentValue {
	const EXPECTED: &'static str = "value";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		Some(value.clone())
	}
}

impl FromArgument for ConfigEntry {
	const EXPECTED: &'static str = "entry";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_entry().cloned()
	}
}

impl<T: FromArgument> FromArgument for Vec<T> {
	const EXPECTED: &'static str = "sequence";

	fn from_argument(value: &ArgumentValue) -> Option<Self> {
		value.as_sequence()?.iter().map(T::from_argument).collect()
	}
}

/// Arguments handed to a factory, with access to the registry for nested
/// entries.
#[derive(Clone, Copy)]
pub struct BuildArgs<'a> {
	pub(super) registry: &'a Registry,
	pub(super) entry: &'a ConfigEntry,
}

impl<'a> BuildArgs<'a> {
	/// Name of the constructor being invoked.
	pub fn constructor(&self) -> &'a str {
		self.entry.name()
	}

	pub fn entry(&self) -> &'a ConfigEntry {
		self.entry
	}

	pub fn raw(&self, name: &str) -> Option<&'a ArgumentValue> {
		self.entry.get(name)
	}

	/// Required argument.
	pub fn get<T: FromArgument>(&self, name: &str) -> Result<T, BuildError> {
		self.get_opt(name)?.ok_or_else(|| BuildError::MissingArgument {
			constructor: self.constructor().to_string(),
			argument: name.to_string(),
		})
	}

	/// Optional argument; present values must still convert.
	pub fn get_opt<T: FromArgument>(&self, name: &str) -> Result<Option<T>, BuildError> {
		let Some(value) = self.raw(name) else {
			return Ok(None);
		};
		T::from_argument(value)
			.map(Some)
			.ok_or_else(|| self.invalid(name, T::EXPECTED, value))
	}

	pub fn get_or<T: FromArgument>(&self, name: &str, default: T) -> Result<T, BuildError> {
		Ok(self.get_opt(name)?.unwrap_or(default))
	}

	/// Builds the nested entry stored under `name`.
	pub fn build<T: Any>(&self, name: &str) -> Result<T, BuildError> {
		let value = self.require(name)?;
		let entry = value
			.as_entry()
			.ok_or_else(|| self.invalid(name, "entry", value))?;
		self.registry.build(entry)
	}

	/// Builds every entry of the sequence stored under `name`.
	pub fn build_each<T: Any>(&self, name: &str) -> Result<Vec<T>, BuildError> {
		let value = self.require(name)?;
		let items = value
			.as_sequence()
			.ok_or_else(|| self.invalid(name, "sequence of entries", value))?;
		items
			.iter()
			.map(|item| match item.as_entry() {
				Some(entry) => self.registry.build(entry),
				None => Err(self.invalid(name, "sequence of entries", item)),
			})
			.collect()
	}

	/// Error helper for factories rejecting a well-typed but unusable value.
	pub fn error(&self, message: impl Into<String>) -> BuildError {
		BuildError::Custom {
			constructor: self.constructor().to_string(),
			message: message.into(),
		}
	}

	fn require(&self, name: &str) -> Result<&'a ArgumentValue, BuildError> {
		self.raw(name).ok_or_else(|| BuildError::MissingArgument {
			constructor: self.constructor().to_string(),
			argument: name.to_string(),
		})
	}

	fn invalid(&self, name: &str, expected: &'static str, found: &ArgumentValue) -> BuildError {
		BuildError::InvalidArgument {
			constructor: self.constructor().to_string(),
			argument: name.to_string(),
			expected,
			found: found.kind(),
		}
	}
}

impl std::fmt::Debug for BuildArgs<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BuildArgs")
			.field("entry", self.entry)
			.finish_non_exhaustive()
	}
}
