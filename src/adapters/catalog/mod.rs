//! Catalog Adapters
//!
//! Implementations of the ResourceSource port.
//!
//! ## Available Adapters
//!
//! - **FileResourceSource** - Reads and writes a JSON or YAML file on disk
//! - **InMemoryResourceSource** - Keeps the document in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::catalog::{FileResourceSource, InMemoryResourceSource};
//!
//! // Production: file-based catalog, format picked from the extension
//! let source = FileResourceSource::new("./config/resources.json");
//!
//! // Testing: in-memory catalog
//! let source = InMemoryResourceSource::new(ResourceCatalog::sample())?;
//! ```

mod file_source;
mod format;
mod in_memory_source;

pub use file_source::FileResourceSource;
pub use format::{content_fingerprint, CatalogFormat};
pub use in_memory_source::InMemoryResourceSource;
