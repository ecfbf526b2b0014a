/* src/loader/impls/mod.rs */

mod dyn_loader;
pub use dyn_loader::{DynLoader, DynLoaderBuilder};
