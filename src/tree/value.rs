/* src/tree/value.rs */

use serde::{Deserialize, Serialize};

use super::ConfigEntry;

/// A leaf argument value.
///
/// Numbers compare by value across variants: `Int(1)`, `UInt(1)` and
/// `Float(1.0)` are all equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Bool(bool),
	Int(i64),
	/// Integers above `i64::MAX`.
	UInt(u64),
	Float(f64),
	Str(String),
}

/// Value bound to an argument name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
	Scalar(Scalar),
	Sequence(Vec<ArgumentValue>),
	/// A nested constructor call.
	Entry(ConfigEntry),
}

impl ArgumentValue {
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_entry(&self) -> Option<&ConfigEntry> {
		match self {
			Self::Entry(e) => Some(e),
			_ => None,
		}
	}

	pub fn as_sequence(&self) -> Option<&[ArgumentValue]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Scalar(Scalar::Str(s)) => Some(s),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Scalar(Scalar::Int(i)) => Some(*i),
			Self::Scalar(Scalar::UInt(u)) => i64::try_from(*u).ok(),
			_ => None,
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Scalar(Scalar::Int(i)) => u64::try_from(*i).ok(),
			Self::Scalar(Scalar::UInt(u)) => Some(*u),
			_ => None,
		}
	}

	/// Integers are widened.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Scalar(Scalar::Float(f)) => Some(*f),
			Self::Scalar(Scalar::Int(i)) => Some(*i as f64),
			Self::Scalar(Scalar::UInt(u)) => Some(*u as f64),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Scalar(Scalar::Bool(b)) => Some(*b),
			_ => None,
		}
	}

	/// Short kind name used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(Scalar::Bool(_)) => "boolean",
			Self::Scalar(Scalar::Int(_)) | Self::Scalar(Scalar::UInt(_)) => "integer",
			Self::Scalar(Scalar::Float(_)) => "float",
			Self::Scalar(Scalar::Str(_)) => "string",
			Self::Sequence(_) => "sequence",
			Self::Entry(_) => "entry",
		}
	}
}

impl From<Scalar> for ArgumentValue {
	fn from(value: Scalar) -> Self {
		Self::Scalar(value)
	}
}

impl From<ConfigEntry> for ArgumentValue {
	fn from(value: ConfigEntry) -> Self {
		Self::Entry(value)
	}
}

impl<T: Into<ArgumentValue>> From<Vec<T>> for ArgumentValue {
	fn from(value: Vec<T>) -> Self {
		Self::Sequence(value.into_iter().map(Into::into).collect())
	}
}

macro_rules! scalar_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Scalar {
				fn from(value: $ty) -> Self {
					Self::$variant(value.into())
				}
			}

			impl From<$ty> for ArgumentValue {
				fn from(value: $ty) -> Self {
					Self::Scalar(Scalar::from(value))
				}
			}
		)*
	};
}

scalar_from! {
	bool => Bool,
	i32 => Int,
	i64 => Int,
	u32 => Int,
	f32 => Float,
	f64 => Float,
	String => Str,
	&str => Str,
}

impl From<u64> for Scalar {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(i) => Self::Int(i),
			Err(_) => Self::UInt(value),
		}
	}
}

impl From<u64> for ArgumentValue {
	fn from(value: u64) -> Self {
		Self::Scalar(Scalar::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn seed(json: &str) -> Scalar {
		let value: ArgumentValue = serde_json::from_str(json).unwrap();
		value.as_scalar().cloned().unwrap()
	}

	#[test]
	fn test_integers_keep_their_precision() {
		assert!(matches!(seed("42"), Scalar::Int(42)));
		assert!(matches!(seed("-42"), Scalar::Int(-42)));
		assert!(matches!(seed("18446744073709551615"), Scalar::UInt(u64::MAX)));
		assert!(matches!(seed("1.5"), Scalar::Float(_)));

		assert_ne!(seed("18446744073709551615"), seed("18446744073709551000"));
		assert_eq!(seed("18446744073709551615"), seed("18446744073709551615"));
	}

	#[test]
	fn test_unsigned_accessors() {
		let big = ArgumentValue::from(u64::MAX);
		assert_eq!(big.as_u64(), Some(u64::MAX));
		assert_eq!(big.as_i64(), None);
		assert_eq!(big.kind(), "integer");

		let small = ArgumentValue::from(7u64);
		assert!(matches!(small.as_scalar(), Some(Scalar::Int(7))));
		assert_eq!(small.as_u64(), Some(7));
		assert_eq!(ArgumentValue::from(-1).as_u64(), None);
	}

	#[test]
	fn test_unsigned_round_trip() {
		let value = ArgumentValue::from(u64::MAX);
		let json = serde_json::to_string(&value).unwrap();
		assert_eq!(json, "18446744073709551615");
		let back: ArgumentValue = serde_json::from_str(&json).unwrap();
		assert_eq!(back.as_u64(), Some(u64::MAX));
	}
}
