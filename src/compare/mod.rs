/* src/compare/mod.rs */

//!
//! Structural equality of configuration trees under skip rules.

mod equality;
mod skip;

pub use equality::{equivalent, values_equivalent};
pub use skip::{SkipRule, SkipSpec};
