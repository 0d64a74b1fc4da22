//! Equality module - structural comparison of matched declarations.
//!
//! Each comparator pairs the children of two declarations that share a name,
//! decides whether the pair is structurally equal, and materializes the
//! [`Difference`]s between them in reporting order. Comparators never decide
//! whether a difference is breaking; see [`crate::warnings`].

mod difference;
mod enums;
mod field;
mod method;
mod signature;
mod unions;

pub use difference::*;
pub use enums::*;
pub use field::*;
pub use method::*;
pub use signature::*;
pub use unions::*;
