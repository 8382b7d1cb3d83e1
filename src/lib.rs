//! LinkGuide - Resource-first survey engine
//!
//! Generates a short adaptive questionnaire from a catalog of promotable
//! resources and resolves a visitor's answers to the single best
//! recommendation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
