//! # Service Combiner
//!
//! Merges a freshly regenerated service module into a previously generated
//! one that a developer may have edited, and reports the schema changes that
//! could break existing clients.
//!
//! Both modules are structured source trees. Declarations are matched by
//! name; each matched pair adopts the regenerated shape and keeps the
//! developer's function bodies. Every breaking difference yields one warning
//! with fixed wording, in the order the regenerated module declares things.
//!
//! ## Modules
//!
//! - [`syntax`] - Declaration tree and type descriptors
//! - [`names`] - Matching sibling declarations by name
//! - [`equality`] - Structural comparison of matched declarations
//! - [`warnings`] - Breaking-change classification and warning templates
//! - [`schema`] - Schema hints consulted while merging
//! - [`combine`] - Per-kind combiners and the module orchestrator

pub mod combine;
pub mod equality;
pub mod error;
pub mod names;
pub mod schema;
pub mod syntax;
pub mod warnings;

pub use combine::{combine_modules, CombineOutcome, CombinerBuilder, ModuleCombiner};
pub use error::MergeError;
pub use names::DuplicateNames;
pub use schema::SchemaModel;
pub use syntax::{Declaration, Module, TypeDescriptor};
pub use warnings::Warning;
