//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResourceSource` - Where the resource catalog is read from and written to

mod resource_source;

pub use resource_source::{LoadedCatalog, ResourceSource, SourceError};
