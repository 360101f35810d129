//! Crate-wide error type for callers that mix construction, execution and
//! interchange in one flow.

use crate::builder::BuildError;
use crate::codec::{CodecError, FormatError};
use crate::core::ValidationError;
use crate::engine::SymbolError;
use thiserror::Error;

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The automaton's parts violate an invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An input symbol is outside the alphabet
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// Encoding, decoding or file access failed
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The builder was incomplete
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Codec(CodecError::Format(err))
    }
}

impl Error {
    /// Whether the failure came from caller input rather than I/O.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Codec(CodecError::Io { .. }))
    }
}
