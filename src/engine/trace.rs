//! Step-by-step execution records for debugging.
//!
//! A [`Trace`] is a lazy, forward-only iterator. It validates each symbol
//! only when the record for that symbol is requested, so a caller sees every
//! record of a valid prefix before the error for the first bad symbol.

use super::error::SymbolError;
use super::run::advance;
use crate::core::{Automaton, Label};
use std::fmt;
use std::iter::FusedIterator;

/// One record of a trace.
///
/// Index 0 is the initial configuration, index `i` (`1..=n`) is the
/// transition on the i-th symbol and index `n + 1` is the terminal record
/// carrying the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord<'a, S, A> {
    pub index: usize,
    /// Symbol consumed by this step. `None` on the initial and terminal
    /// records.
    pub symbol: Option<&'a A>,
    /// State before the step.
    pub current: &'a S,
    /// State after the step. `None` on the initial record; the final state
    /// on the terminal record.
    pub next: Option<&'a S>,
    pub processed: &'a [A],
    pub remaining: &'a [A],
    pub is_final: bool,
    /// Acceptance verdict, set on the terminal record only.
    pub accepted: Option<bool>,
}

impl<S: fmt::Display, A: fmt::Display> StepRecord<'_, S, A> {
    /// One-line description of what happened at this step.
    pub fn describe(&self) -> String {
        match (self.symbol, self.next, self.accepted) {
            (_, _, Some(true)) => {
                format!("Final state {} is in accept states → ACCEPT", self.current)
            }
            (_, _, Some(false)) => {
                format!("Final state {} is NOT in accept states → REJECT", self.current)
            }
            (Some(symbol), Some(next), None) => {
                format!("δ({}, {}) → {}", self.current, symbol, next)
            }
            _ => "Initial configuration".to_string(),
        }
    }
}

impl<S: fmt::Display, A: fmt::Display> fmt::Display for StepRecord<'_, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.describe())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Initial,
    Consuming,
    Done,
}

/// Lazy sequence of [`StepRecord`]s for one run.
///
/// Yields `Ok` records until the input is exhausted and the terminal record
/// has been produced, or yields a single `Err` for the first symbol outside
/// the alphabet. After either, the iterator returns `None` forever. A trace
/// cannot be restarted; call [`trace`] again for a fresh one.
#[derive(Debug)]
pub struct Trace<'a, S: Label, A: Label> {
    automaton: &'a Automaton<S, A>,
    input: &'a [A],
    position: usize,
    current: &'a S,
    phase: Phase,
}

impl<'a, S: Label, A: Label> Trace<'a, S, A> {
    fn record(&self, symbol: Option<&'a A>, next: Option<&'a S>) -> StepRecord<'a, S, A> {
        StepRecord {
            index: match self.phase {
                Phase::Initial => 0,
                _ => self.position,
            },
            symbol,
            current: self.current,
            next,
            processed: &self.input[..self.position],
            remaining: &self.input[self.position..],
            is_final: false,
            accepted: None,
        }
    }
}

impl<'a, S: Label, A: Label> Iterator for Trace<'a, S, A> {
    type Item = Result<StepRecord<'a, S, A>, SymbolError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::Initial => {
                let record = self.record(None, None);
                self.phase = Phase::Consuming;
                Some(Ok(record))
            }
            Phase::Consuming if self.position < self.input.len() => {
                let symbol = &self.input[self.position];
                let next = match advance(self.automaton, self.current, symbol, self.position) {
                    Ok(next) => next,
                    Err(err) => {
                        self.phase = Phase::Done;
                        return Some(Err(err));
                    }
                };
                let from = self.current;
                self.position += 1;
                self.current = next;
                Some(Ok(StepRecord {
                    current: from,
                    ..self.record(Some(symbol), Some(next))
                }))
            }
            Phase::Consuming => {
                let accepted = self.automaton.is_accepting(self.current);
                self.phase = Phase::Done;
                Some(Ok(StepRecord {
                    index: self.input.len() + 1,
                    is_final: true,
                    accepted: Some(accepted),
                    ..self.record(None, Some(self.current))
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match self.phase {
            Phase::Done => 0,
            Phase::Initial => self.input.len() + 2,
            Phase::Consuming => self.input.len() - self.position + 1,
        };
        (0, Some(upper))
    }
}

impl<S: Label, A: Label> FusedIterator for Trace<'_, S, A> {}

/// Start a step-by-step trace of `input`.
///
/// Nothing is validated up front; see [`Trace`].
///
/// # Example
///
/// ```rust
/// use dfakit::core::Automaton;
/// use dfakit::engine::trace;
///
/// let dfa = Automaton::new(
///     ["q0", "q1"],
///     ['a'],
///     [(("q0", 'a'), "q1"), (("q1", 'a'), "q0")],
///     "q0",
///     ["q1"],
/// )
/// .unwrap();
///
/// let input: Vec<char> = "aaa".chars().collect();
/// let records: Vec<_> = trace(&dfa, &input).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), input.len() + 2);
/// assert_eq!(records.last().unwrap().accepted, Some(true));
/// ```
pub fn trace<'a, S: Label, A: Label>(
    automaton: &'a Automaton<S, A>,
    input: &'a [A],
) -> Trace<'a, S, A> {
    Trace {
        automaton,
        input,
        position: 0,
        current: automaton.start(),
        phase: Phase::Initial,
    }
}

impl<S: Label, A: Label> Automaton<S, A> {
    /// See [`trace`].
    pub fn trace<'a>(&'a self, input: &'a [A]) -> Trace<'a, S, A> {
        trace(self, input)
    }
}
