/* src/tree/mod.rs */

//!
//! In-memory model of a saved constructor call.
//!
//! - [`ConfigEntry`] - constructor name plus named arguments
//! - [`Arguments`] - insertion-ordered argument mapping
//! - [`ArgumentValue`] / [`Scalar`] - what an argument can hold

mod arguments;
mod display;
mod entry;
mod value;

pub use arguments::Arguments;
pub use entry::ConfigEntry;
pub use value::{ArgumentValue, Scalar};
