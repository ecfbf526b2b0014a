/* src/registry/error.rs */

/// Errors raised while rebuilding objects from configuration trees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// No factory is registered under the constructor name.
	#[error("unknown constructor: {name}")]
	UnknownConstructor { name: String },

	/// A required argument is absent.
	#[error("{constructor}: missing argument `{argument}`")]
	MissingArgument {
		constructor: String,
		argument: String,
	},

	/// An argument holds a value of the wrong kind.
	#[error("{constructor}: argument `{argument}` expected {expected}, found {found}")]
	InvalidArgument {
		constructor: String,
		argument: String,
		expected: &'static str,
		found: &'static str,
	},

	/// The factory produced a value of another type than requested.
	#[error("{constructor}: factory does not produce {expected}")]
	TypeMismatch {
		constructor: String,
		expected: &'static str,
	},

	/// Error reported by a factory.
	#[error("{constructor}: {message}")]
	Custom {
		constructor: String,
		message: String,
	},
}
