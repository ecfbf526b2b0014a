/* src/tree/arguments.rs */

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ArgumentValue;

/// Named arguments of a [`ConfigEntry`](super::ConfigEntry).
///
/// Keeps insertion order for display and serialization. Names are unique:
/// inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
	items: Vec<(String, ArgumentValue)>,
}

impl Arguments {
	/// Creates an empty argument set.
	pub const fn new() -> Self {
		Self { items: Vec::new() }
	}

	/// Inserts an argument, returning the previous value stored under `name`.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<ArgumentValue>,
	) -> Option<ArgumentValue> {
		let name = name.into();
		let value = value.into();
		match self.items.iter_mut().find(|(k, _)| *k == name) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.items.push((name, value));
				None
			}
		}
	}

	/// Removes an argument, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<ArgumentValue> {
		let idx = self.items.iter().position(|(k, _)| k == name)?;
		Some(self.items.remove(idx).1)
	}

	pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
		self.items.iter().find(|(k, _)| k == name).map(|(_, v)| v)
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.items.iter().any(|(k, _)| k == name)
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
		self.items.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(|(k, _)| k.as_str())
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
	K: Into<String>,
	V: Into<ArgumentValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut args = Self::new();
		for (k, v) in iter {
			args.insert(k, v);
		}
		args
	}
}

impl Serialize for Arguments {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.items.len()))?;
		for (k, v) in &self.items {
			map.serialize_entry(k, v)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Arguments {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct ArgumentsVisitor;

		impl<'de> Visitor<'de> for ArgumentsVisitor {
			type Value = Arguments;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a map of argument names to values")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Arguments, A::Error> {
				let mut args = Arguments::new();
				while let Some((name, value)) = map.next_entry::<String, ArgumentValue>()? {
					if args.contains_key(&name) {
						return Err(de::Error::custom(format!("duplicate argument `{}`", name)));
					}
					args.items.push((name, value));
				}
				Ok(args)
			}
		}

		deserializer.deserialize_map(ArgumentsVisitor)
	}
}
