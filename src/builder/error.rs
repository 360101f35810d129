//! Build errors for the automaton builder.

use crate::core::ValidationError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
