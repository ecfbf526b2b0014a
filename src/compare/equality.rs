/* src/compare/equality.rs */

use super::SkipSpec;
use crate::tree::{ArgumentValue, ConfigEntry, Scalar};

static NO_SKIP: SkipSpec = SkipSpec::new();

/// Structural equality of two entries under `skip`.
///
/// Names must match exactly. An argument is left out of the comparison when
/// its value on either side is covered by the skip rule for its name; every
/// other argument must be present on both sides with equivalent values.
/// Argument order is irrelevant.
pub fn equivalent(a: &ConfigEntry, b: &ConfigEntry, skip: &SkipSpec) -> bool {
	if a.name() != b.name() {
		return false;
	}

	let (lhs, rhs) = (a.arguments(), b.arguments());

	for (key, left) in lhs.iter() {
		let right = rhs.get(key);
		if skip.excludes(key, left) || right.is_some_and(|r| skip.excludes(key, r)) {
			continue;
		}
		match right {
			Some(right) if values_equivalent(left, right, skip) => {}
			_ => return false,
		}
	}

	// Keys only present on the right side.
	rhs.iter()
		.filter(|(key, _)| !lhs.contains_key(key))
		.all(|(key, right)| skip.excludes(key, right))
}

/// Equality of two argument values under `skip`.
///
/// Sequences compare element-wise in order. Values of different kinds are
/// unequal.
pub fn values_equivalent(a: &ArgumentValue, b: &ArgumentValue, skip: &SkipSpec) -> bool {
	match (a, b) {
		(ArgumentValue::Scalar(x), ArgumentValue::Scalar(y)) => x == y,
		(ArgumentValue::Entry(x), ArgumentValue::Entry(y)) => equivalent(x, y, skip),
		(ArgumentValue::Sequence(xs), ArgumentValue::Sequence(ys)) => {
			xs.len() == ys.len()
				&& xs
					.iter()
					.zip(ys)
					.all(|(x, y)| values_equivalent(x, y, skip))
		}
		_ => false,
	}
}

impl ConfigEntry {
	/// Same as [`equivalent`] with `self` on the left.
	pub fn equivalent_to(&self, other: &ConfigEntry, skip: &SkipSpec) -> bool {
		equivalent(self, other, skip)
	}
}

// 2^64, the first float past every `i64` and `u64`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Exact integer/float equality; the integer is never rounded to `f64`.
fn int_equals_float(i: i128, f: f64) -> bool {
	f.fract() == 0.0 && (-TWO_POW_64..TWO_POW_64).contains(&f) && f as i128 == i
}

impl PartialEq for Scalar {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Bool(x), Self::Bool(y)) => x == y,
			(Self::Int(x), Self::Int(y)) => x == y,
			(Self::UInt(x), Self::UInt(y)) => x == y,
			(Self::Float(x), Self::Float(y)) => x == y,
			(Self::Int(i), Self::UInt(u)) | (Self::UInt(u), Self::Int(i)) => {
				i128::from(*i) == i128::from(*u)
			}
			(Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
				int_equals_float(i128::from(*i), *f)
			}
			(Self::UInt(u), Self::Float(f)) | (Self::Float(f), Self::UInt(u)) => {
				int_equals_float(i128::from(*u), *f)
			}
			(Self::Str(x), Self::Str(y)) => x == y,
			_ => false,
		}
	}
}

impl PartialEq for ArgumentValue {
	fn eq(&self, other: &Self) -> bool {
		values_equivalent(self, other, &NO_SKIP)
	}
}

impl PartialEq for ConfigEntry {
	fn eq(&self, other: &Self) -> bool {
		equivalent(self, other, &NO_SKIP)
	}
}
