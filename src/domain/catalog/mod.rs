//! Catalog Module - The operator's resource list and its analysis.
//!
//! # Components
//!
//! - `Resource` - One promotable item (course, community, tool)
//! - `ResourceCatalog` - The whole document: owner, resources, pass-through links
//! - `ResourceAnalyzer` - Partitions resources along category, price and format
//!
//! Resources are immutable input: nothing in the domain mutates them.

mod analyzer;
mod resource;

pub use analyzer::{Axis, AxisPartition, ResourceAnalysis, ResourceAnalyzer, UNDEFINED_AXIS_KEY};
pub use resource::{Experience, Requirements, Resource, ResourceCatalog, FREE_TIER};
