//! Automaton model.
//!
//! This module contains the validated 5-tuple and its invariants:
//! - Labels for states and symbols via the `Label` trait
//! - The immutable `Automaton`, checked eagerly at construction
//! - `ValidationError` describing the first violated invariant
//!
//! Nothing in this module mutates an automaton after construction.

mod automaton;
mod error;
mod label;
pub(crate) mod validate;

pub use automaton::Automaton;
pub use error::ValidationError;
pub use label::Label;
