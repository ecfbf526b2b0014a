/* src/compare/skip.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::ArgumentValue;

/// What to ignore for one argument name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
	from = "Option<Vec<ArgumentValue>>",
	into = "Option<Vec<ArgumentValue>>"
)]
pub enum SkipRule {
	/// Ignore the argument whatever its value. Serialized as `null`.
	Always,
	/// Ignore the argument when its value, or any element of a sequence
	/// value, equals one of these.
	Values(Vec<ArgumentValue>),
}

impl SkipRule {
	/// Returns true if `value` is covered by this rule.
	pub fn matches(&self, value: &ArgumentValue) -> bool {
		match self {
			Self::Always => true,
			Self::Values(listed) => {
				listed.contains(value)
					|| value
						.as_sequence()
						.is_some_and(|items| items.iter().any(|item| listed.contains(item)))
			}
		}
	}
}

impl From<Option<Vec<ArgumentValue>>> for SkipRule {
	fn from(value: Option<Vec<ArgumentValue>>) -> Self {
		match value {
			Some(values) => Self::Values(values),
			None => Self::Always,
		}
	}
}

impl From<SkipRule> for Option<Vec<ArgumentValue>> {
	fn from(rule: SkipRule) -> Self {
		match rule {
			SkipRule::Always => None,
			SkipRule::Values(values) => Some(values),
		}
	}
}

/// Per-argument-name exclusion rules used while comparing entries.
///
/// Rules apply at every nesting level where the argument name appears.
/// The serialized form is a mapping from argument name to a list of values
/// (or `null` to skip the name unconditionally):
///
/// ```
/// use confmgr::SkipSpec;
///
/// let skip: SkipSpec = serde_json::from_str(r#"{"y": [2, 3], "seed": null}"#).unwrap();
/// assert_eq!(skip.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipSpec {
	rules: BTreeMap<String, SkipRule>,
}

impl SkipSpec {
	/// No rules: plain structural equality.
	pub const fn new() -> Self {
		Self {
			rules: BTreeMap::new(),
		}
	}

	/// Skips `name` when it holds any of `values`.
	pub fn values<I, V>(mut self, name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<ArgumentValue>,
	{
		let values = values.into_iter().map(Into::into).collect();
		self.rules.insert(name.into(), SkipRule::Values(values));
		self
	}

	/// Skips `name` unconditionally.
	pub fn always(mut self, name: impl Into<String>) -> Self {
		self.rules.insert(name.into(), SkipRule::Always);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, rule: SkipRule) -> Option<SkipRule> {
		self.rules.insert(name.into(), rule)
	}

	pub fn remove(&mut self, name: &str) -> Option<SkipRule> {
		self.rules.remove(name)
	}

	pub fn rule(&self, name: &str) -> Option<&SkipRule> {
		self.rules.get(name)
	}

	/// Returns true if the argument `name` holding `value` is excluded.
	pub fn excludes(&self, name: &str, value: &ArgumentValue) -> bool {
		self.rules.get(name).is_some_and(|rule| rule.matches(value))
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

/// Parses the JSON form, e.g. `{"y": [2, 3]}`.
#[cfg(feature = "json")]
impl std::str::FromStr for SkipSpec {
	type Err = serde_json::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		serde_json::from_str(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_values_rule() {
		let skip = SkipSpec::new().values("y", [2, 3]);
		assert!(skip.excludes("y", &2.into()));
		assert!(skip.excludes("y", &3.into()));
		assert!(!skip.excludes("y", &4.into()));
		assert!(!skip.excludes("x", &2.into()));
	}

	#[test]
	fn test_sequence_matches_any_element() {
		let skip = SkipSpec::new().values("tags", ["debug"]);
		assert!(skip.excludes("tags", &vec!["release", "debug"].into()));
		assert!(!skip.excludes("tags", &vec!["release"].into()));
	}

	#[test]
	fn test_always_rule() {
		let skip = SkipSpec::new().always("seed");
		assert!(skip.excludes("seed", &42.into()));
		assert!(skip.excludes("seed", &"anything".into()));
	}

	#[test]
	fn test_deserialize() {
		let skip: SkipSpec = serde_json::from_str(r#"{"y": [2, 3.5, "a"], "seed": null}"#).unwrap();
		assert_eq!(skip.rule("seed"), Some(&SkipRule::Always));
		assert!(skip.excludes("y", &3.5.into()));
		assert!(skip.excludes("y", &"a".into()));
	}

	#[test]
	fn test_deserialize_rejects_malformed() {
		assert!(serde_json::from_str::<SkipSpec>(r#"["y"]"#).is_err());
		assert!(serde_json::from_str::<SkipSpec>(r#"{"y": 2}"#).is_err());
		assert!(serde_json::from_str::<SkipSpec>(r#""y""#).is_err());
	}
}
