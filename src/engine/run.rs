//! Whole-input simulation: acceptance and visited-state paths.

use super::error::SymbolError;
use crate::core::{Automaton, Label};
use std::borrow::Borrow;

/// Outcome of [`run_with_path`]: the verdict and every state visited.
///
/// `states` starts with the start state and holds one more entry than the
/// input had symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunPath<'a, S> {
    pub accepted: bool,
    pub states: Vec<&'a S>,
}

impl<'a, S> RunPath<'a, S> {
    /// The state the run ended in.
    pub fn final_state(&self) -> &'a S {
        // `states` always holds at least the start state.
        self.states[self.states.len() - 1]
    }

    /// Number of transitions taken.
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }
}

/// Apply one symbol, refusing symbols outside the alphabet before any
/// transition happens.
pub(crate) fn advance<'a, S: Label, A: Label>(
    automaton: &'a Automaton<S, A>,
    current: &'a S,
    symbol: &A,
    position: usize,
) -> Result<&'a S, SymbolError> {
    if !automaton.has_symbol(symbol) {
        tracing::debug!(%symbol, position, "symbol outside alphabet");
        return Err(SymbolError::new(symbol, position));
    }
    let next = automaton
        .step(current, symbol)
        .ok_or_else(|| SymbolError::new(symbol, position))?;
    tracing::trace!(from = %current, %symbol, to = %next, position, "step");
    Ok(next)
}

/// Decide whether `input` is accepted.
///
/// Fails on the first symbol outside the alphabet. Empty input is accepted
/// exactly when the start state is accepting.
///
/// # Example
///
/// ```rust
/// use dfakit::core::Automaton;
/// use dfakit::engine::accepts;
///
/// let dfa = Automaton::new(
///     ["q0", "q1"],
///     ['a'],
///     [(("q0", 'a'), "q1"), (("q1", 'a'), "q0")],
///     "q0",
///     ["q0"],
/// )
/// .unwrap();
///
/// assert_eq!(accepts(&dfa, "aa".chars()), Ok(true));
/// assert_eq!(accepts(&dfa, "a".chars()), Ok(false));
/// assert!(accepts(&dfa, "ab".chars()).is_err());
/// ```
pub fn accepts<S, A, I>(automaton: &Automaton<S, A>, input: I) -> Result<bool, SymbolError>
where
    S: Label,
    A: Label,
    I: IntoIterator,
    I::Item: Borrow<A>,
{
    let mut current = automaton.start();
    for (position, symbol) in input.into_iter().enumerate() {
        current = advance(automaton, current, symbol.borrow(), position)?;
    }
    Ok(automaton.is_accepting(current))
}

/// Like [`accepts`], also returning every state visited, start included.
pub fn run_with_path<'a, S, A, I>(
    automaton: &'a Automaton<S, A>,
    input: I,
) -> Result<RunPath<'a, S>, SymbolError>
where
    S: Label,
    A: Label,
    I: IntoIterator,
    I::Item: Borrow<A>,
{
    let input = input.into_iter();
    let mut states = Vec::with_capacity(input.size_hint().0 + 1);
    let mut current = automaton.start();
    states.push(current);

    for (position, symbol) in input.enumerate() {
        current = advance(automaton, current, symbol.borrow(), position)?;
        states.push(current);
    }

    Ok(RunPath {
        accepted: automaton.is_accepting(current),
        states,
    })
}

impl<S: Label, A: Label> Automaton<S, A> {
    /// See [`accepts`].
    pub fn accepts<I>(&self, input: I) -> Result<bool, SymbolError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        accepts(self, input)
    }

    /// See [`run_with_path`].
    pub fn run_with_path<I>(&self, input: I) -> Result<RunPath<'_, S>, SymbolError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        run_with_path(self, input)
    }
}
