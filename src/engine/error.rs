//! Errors raised while running input through an automaton.

use thiserror::Error;

/// An input symbol outside the automaton's alphabet.
///
/// `position` is the zero-based index of the symbol in the input. No
/// transition is applied for it or for anything after it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid symbol '{symbol}' at position {position}: not in alphabet")]
pub struct SymbolError {
    pub symbol: String,
    pub position: usize,
}

impl SymbolError {
    pub(crate) fn new(symbol: impl ToString, position: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
        }
    }
}
