/* src/tree/display.rs */

use std::fmt::{self, Display, Formatter};

use super::{ArgumentValue, ConfigEntry, Scalar};

const INDENT: usize = 4;

impl Display for Scalar {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => write!(f, "{}", b),
			Self::Int(i) => write!(f, "{}", i),
			Self::UInt(u) => write!(f, "{}", u),
			// Debug keeps the decimal point on integral floats.
			Self::Float(x) => write!(f, "{:?}", x),
			Self::Str(s) => write!(f, "{:?}", s),
		}
	}
}

impl Display for ArgumentValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_value(f, self, 0)
	}
}

/// Multi-line rendering:
///
/// ```text
/// Outer(
///     inner = Inner(
///         z = 1
///     )
///     label = "x"
/// )
/// ```
impl Display for ConfigEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_entry(f, self, 0)
	}
}

fn write_entry(f: &mut Formatter<'_>, entry: &ConfigEntry, indent: usize) -> fmt::Result {
	let args = entry.arguments();
	if args.is_empty() {
		return write!(f, "{}()", entry.name());
	}

	let width = args.keys().map(str::len).max().unwrap_or(0);
	let inner = indent + INDENT;

	writeln!(f, "{}(", entry.name())?;
	for (key, value) in args.iter() {
		write!(f, "{:inner$}{:<width$} = ", "", key)?;
		write_value(f, value, inner)?;
		writeln!(f)?;
	}
	write!(f, "{:indent$})", "")
}

fn write_value(f: &mut Formatter<'_>, value: &ArgumentValue, indent: usize) -> fmt::Result {
	match value {
		ArgumentValue::Scalar(s) => write!(f, "{}", s),
		ArgumentValue::Entry(e) => write_entry(f, e, indent),
		ArgumentValue::Sequence(items) => {
			f.write_str("[")?;
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				write_value(f, item, indent)?;
			}
			f.write_str("]")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_empty_entry() {
		assert_eq!(ConfigEntry::new("ttcl").to_string(), "ttcl()");
	}

	#[test]
	fn test_display_nested() {
		let entry = ConfigEntry::new("Outer")
			.arg("inner", ConfigEntry::new("Inner").arg("z", 1))
			.arg("label", "x")
			.arg("ratio", 2.0)
			.arg("list", vec![1, 2]);

		let expected = "\
Outer(
    inner = Inner(
        z = 1
    )
    label = \"x\"
    ratio = 2.0
    list  = [1, 2]
)";
		assert_eq!(entry.to_string(), expected);
	}
}
