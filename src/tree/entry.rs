/* src/tree/entry.rs */

use serde::{Deserialize, Serialize};

use super::{ArgumentValue, Arguments};

/// A saved constructor call: the constructor name plus its named arguments.
///
/// Children are owned, so a tree never contains cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntry {
	name: String,
	#[serde(default, skip_serializing_if = "Arguments::is_empty")]
	arguments: Arguments,
}

impl ConfigEntry {
	/// Creates an entry without arguments.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			arguments: Arguments::new(),
		}
	}

	/// Creates an entry from a name and a prepared argument set.
	pub fn with_arguments(name: impl Into<String>, arguments: Arguments) -> Self {
		Self {
			name: name.into(),
			arguments,
		}
	}

	/// Adds (or replaces) an argument, builder style.
	///
	/// ```
	/// use confmgr::ConfigEntry;
	///
	/// let inner = ConfigEntry::new("Inner").arg("z", 1);
	/// let outer = ConfigEntry::new("Outer").arg("inner", inner).arg("label", "x");
	/// assert_eq!(outer.arguments().len(), 2);
	/// ```
	pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
		self.arguments.insert(name, value);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn arguments(&self) -> &Arguments {
		&self.arguments
	}

	pub fn arguments_mut(&mut self) -> &mut Arguments {
		&mut self.arguments
	}

	/// Shortcut for `self.arguments().get(name)`.
	pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
		self.arguments.get(name)
	}

	/// Visits this entry and every nested entry, depth first.
	pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ConfigEntry)) {
		visit(self);
		for (_, value) in self.arguments.iter() {
			walk_value(value, visit);
		}
	}
}

fn walk_value<'a>(value: &'a ArgumentValue, visit: &mut impl FnMut(&'a ConfigEntry)) {
	match value {
		ArgumentValue::Entry(entry) => entry.walk(visit),
		ArgumentValue::Sequence(items) => {
			for item in items {
				walk_value(item, visit);
			}
		}
		ArgumentValue::Scalar(_) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> ConfigEntry {
		ConfigEntry::new("B")
			.arg("arg1", ConfigEntry::new("A").arg("arg", 1))
			.arg("arg2", "name")
			.arg("list", vec![ArgumentValue::from(ConfigEntry::new("C")), 2.into()])
	}

	#[test]
	fn test_walk_visits_nested_entries() {
		let entry = sample();
		let mut names = Vec::new();
		entry.walk(&mut |e| names.push(e.name().to_string()));
		assert_eq!(names, vec!["B", "A", "C"]);
	}

	#[test]
	fn test_json_shape() {
		let entry: ConfigEntry = serde_json::from_str(
			r#"{
				"name": "B",
				"arguments": {
					"arg1": { "name": "A", "arguments": { "arg": 1 } },
					"arg2": "name",
					"list": [{ "name": "C" }, 2]
				}
			}"#,
		)
		.unwrap();

		assert_eq!(entry.name(), "B");
		assert_eq!(entry.get("arg1").and_then(ArgumentValue::as_entry).map(ConfigEntry::name), Some("A"));
		assert_eq!(entry.get("arg2").and_then(ArgumentValue::as_str), Some("name"));
		assert_eq!(entry.get("list").and_then(ArgumentValue::as_sequence).map(<[_]>::len), Some(2));
	}

	#[test]
	fn test_table_without_name_is_rejected() {
		let res = serde_json::from_str::<ConfigEntry>(r#"{"name": "B", "arguments": {"d": {"first": 1}}}"#);
		assert!(res.is_err());
	}

	#[test]
	fn test_unknown_field_is_rejected() {
		let res = serde_json::from_str::<ConfigEntry>(r#"{"name": "B", "kwargs": {}}"#);
		assert!(res.is_err());
	}

	#[test]
	fn test_empty_arguments_are_omitted() {
		let json = serde_json::to_string(&ConfigEntry::new("A")).unwrap();
		assert_eq!(json, r#"{"name":"A"}"#);
	}
}
