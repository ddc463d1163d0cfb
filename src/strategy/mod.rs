//! Parsing Strategy Module
//!
//! - Single document: `crate::parse` (synchronous, one scanner per call)
//! - Batch: parse many independent documents in parallel

pub mod parallel;

pub use parallel::{normalize_batch, parse_batch};
