/* src/lib.rs */

//!
//! Persist the constructor and arguments used to build an object, rebuild the
//! object later, and find configurations that describe the same object.
//!
//! This crate is organised in layers:
//!
//! - **tree**: [`ConfigEntry`], the in-memory model of a saved constructor call.
//! - **compare**: structural equality under [`SkipSpec`] exclusion rules.
//! - **search**: [`find_matches`] and [`partition_duplicates`].
//! - **registry**: rebuilding objects from trees through named factories.
//! - **loader**: format-agnostic reading/writing of trees (feature `loader`).
//! - **scan**: loading every configuration of a directory (feature `scan`).
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features, the `confmgr` binary included.
//! - `loader`: Enables the `loader` module.
//! - `loader-full`: `loader` with `fs`, `json`, `toml`, `yaml` and `logging` (default).
//! - `fs`: File system source.
//! - `json`, `toml`, `yaml`: Formats.
//! - `scan`: Enables the `scan` module.
//! - `logging`: Emits `log` records from the loader and scanner.
//! - `cli`: Builds the `confmgr` binary.
//!
//! ## Basic Usage
//!
//! ```
//! use confmgr::{ConfigEntry, SkipSpec, partition_duplicates};
//!
//! let foo = |y: i64| ConfigEntry::new("Foo").arg("x", 1).arg("y", y);
//! let files = vec![("a.toml", foo(2)), ("b.toml", foo(3)), ("c.toml", foo(2))];
//!
//! let groups = partition_duplicates(&files, &SkipSpec::new());
//! assert_eq!(groups[0].ids, vec![&"a.toml", &"c.toml"]);
//!
//! let skip = SkipSpec::new().values("y", [2, 3]);
//! assert_eq!(partition_duplicates(&files, &skip).len(), 1);
//! ```

pub mod compare;
pub mod registry;
pub mod search;
pub mod tree;

#[cfg(feature = "loader")]
pub mod loader;

#[cfg(feature = "scan")]
pub mod scan;

pub use compare::{SkipRule, SkipSpec, equivalent};
pub use registry::{BuildArgs, BuildError, Registry};
pub use search::{DuplicateGroup, find_matches, partition_duplicates};
pub use tree::{ArgumentValue, Arguments, ConfigEntry, Scalar};
