//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `dfa!` macro for creating
//! automata with minimal boilerplate. Both end in [`Automaton::new`], so
//! they enforce exactly the same invariants.
//!
//! [`Automaton::new`]: crate::core::Automaton::new

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
