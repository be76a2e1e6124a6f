//! Check declarations and the fluent builder that expands them.

pub mod builder;
pub mod check;

pub use builder::Checks;
pub use check::{upper_invariant, Check};
