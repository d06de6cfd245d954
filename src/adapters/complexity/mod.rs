//! Complexity oracle adapters
//!
//! The cyclomatic complexity calculator runs upstream, next to the parser.
//! These adapters turn what it left in the class model into scores.

pub mod recorded;
pub mod uniform;

pub use recorded::RecordedComplexity;
pub use uniform::UniformComplexity;
