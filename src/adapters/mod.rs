//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - Resource sources (JSON/YAML file, in-memory)

pub mod catalog;

pub use catalog::{CatalogFormat, FileResourceSource, InMemoryResourceSource};
