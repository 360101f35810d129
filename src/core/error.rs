//! Validation errors raised while constructing an automaton.

use thiserror::Error;

/// Structural invariant violated by the parts of an automaton.
///
/// Labels are rendered with their `Display` implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start state '{start}' is not in the set of states")]
    StartNotInStates { start: String },

    #[error("Accepting state '{state}' is not in the set of states")]
    AcceptingNotInStates { state: String },

    #[error("Missing transition for ({state}, {symbol}) ({missing} missing in total)")]
    MissingTransition {
        state: String,
        symbol: String,
        missing: usize,
    },

    #[error("Transition ({state}, {symbol}) targets unknown state '{target}'")]
    InvalidTarget {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Transition ({state}, {symbol}) leaves from unknown state '{state}'")]
    UnknownTransitionState { state: String, symbol: String },

    #[error("Transition ({state}, {symbol}) uses symbol '{symbol}' outside the alphabet")]
    UnknownTransitionSymbol { state: String, symbol: String },

    #[error("Conflicting transitions for ({state}, {symbol}): '{first}' and '{second}'")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },
}
