//! Structural checks over the raw parts of an automaton.
//!
//! Checks run in a fixed order: start membership, accepting subset,
//! totality, target validity, transition domain, conflicts. Within each
//! check, offenders are reported in canonical (label `Ord`) order so the
//! first violation is the same on every run.

use super::error::ValidationError;
use super::label::Label;
use std::collections::{BTreeSet, HashMap};

/// Nested transition table: state -> (symbol -> state).
pub(crate) type Table<S, A> = HashMap<S, HashMap<A, S>>;

/// Unvalidated parts gathered from caller input.
pub(crate) struct Parts<S: Label, A: Label> {
    pub(crate) states: BTreeSet<S>,
    pub(crate) alphabet: BTreeSet<A>,
    pub(crate) table: Table<S, A>,
    pub(crate) accepting: BTreeSet<S>,
    conflicts: Vec<(S, A, S, S)>,
}

impl<S: Label, A: Label> Parts<S, A> {
    /// Gather raw input into sets and a nested table.
    ///
    /// The first destination given for a key is kept; later differing
    /// destinations are recorded as conflicts.
    pub(crate) fn collect<Q, E, T, F>(states: Q, alphabet: E, transitions: T, accepting: F) -> Self
    where
        Q: IntoIterator<Item = S>,
        E: IntoIterator<Item = A>,
        T: IntoIterator<Item = ((S, A), S)>,
        F: IntoIterator<Item = S>,
    {
        let mut table: Table<S, A> = HashMap::new();
        let mut conflicts = Vec::new();

        for ((from, symbol), to) in transitions {
            let row = table.entry(from.clone()).or_default();
            match row.get(&symbol) {
                Some(existing) if *existing != to => {
                    conflicts.push((from, symbol, existing.clone(), to));
                }
                Some(_) => {}
                None => {
                    row.insert(symbol, to);
                }
            }
        }

        Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            table,
            accepting: accepting.into_iter().collect(),
            conflicts,
        }
    }

    fn lookup(&self, state: &S, symbol: &A) -> Option<&S> {
        self.table.get(state).and_then(|row| row.get(symbol))
    }

    /// Every violation, in check order. `start` is skipped when `None`.
    pub(crate) fn violations(&self, start: Option<&S>) -> Vec<ValidationError> {
        let mut found = Vec::new();

        if let Some(start) = start {
            if !self.states.contains(start) {
                found.push(ValidationError::StartNotInStates {
                    start: start.to_string(),
                });
            }
        }

        for state in self.accepting.difference(&self.states) {
            found.push(ValidationError::AcceptingNotInStates {
                state: state.to_string(),
            });
        }

        let missing: Vec<(&S, &A)> = self
            .states
            .iter()
            .flat_map(|s| self.alphabet.iter().map(move |a| (s, a)))
            .filter(|(s, a)| self.lookup(s, a).is_none())
            .collect();
        let total = missing.len();
        found.extend(
            missing
                .into_iter()
                .map(|(state, symbol)| ValidationError::MissingTransition {
                    state: state.to_string(),
                    symbol: symbol.to_string(),
                    missing: total,
                }),
        );

        for state in &self.states {
            for symbol in &self.alphabet {
                if let Some(target) = self.lookup(state, symbol) {
                    if !self.states.contains(target) {
                        found.push(ValidationError::InvalidTarget {
                            state: state.to_string(),
                            symbol: symbol.to_string(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        let mut outside: Vec<(&S, &A)> = self
            .table
            .iter()
            .flat_map(|(s, row)| row.keys().map(move |a| (s, a)))
            .filter(|(s, a)| !self.states.contains(*s) || !self.alphabet.contains(*a))
            .collect();
        outside.sort();
        for (state, symbol) in outside {
            let err = if !self.states.contains(state) {
                ValidationError::UnknownTransitionState {
                    state: state.to_string(),
                    symbol: symbol.to_string(),
                }
            } else {
                ValidationError::UnknownTransitionSymbol {
                    state: state.to_string(),
                    symbol: symbol.to_string(),
                }
            };
            found.push(err);
        }

        let mut conflicts: Vec<&(S, A, S, S)> = self.conflicts.iter().collect();
        conflicts.sort();
        for (state, symbol, first, second) in conflicts {
            found.push(ValidationError::ConflictingTransition {
                state: state.to_string(),
                symbol: symbol.to_string(),
                first: first.to_string(),
                second: second.to_string(),
            });
        }

        found
    }
}
