//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `catalog` - Resource records and the Resource Analyzer
//! - `survey` - Survey Builder, survey data shapes and the Rule Matcher

pub mod catalog;
pub mod foundation;
pub mod survey;
