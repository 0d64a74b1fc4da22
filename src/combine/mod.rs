//! Combine module - merging a regenerated module into a previous one.
//!
//! The orchestrator matches module members by name and hands each matched
//! pair to the combiner for its kind. A combiner compares the pair, turns the
//! breaking differences into warnings, and returns the merged declaration.

pub mod combiner;
mod orchestrator;


pub use orchestrator::*;
