//! Schema module - the parts of the source schema the combiner consults.
//!
//! Schemas are parsed by an external collaborator; the combiner only needs the
//! declared member order of union types to lay out regenerated unions.

mod model;

pub use model::*;
