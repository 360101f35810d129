//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::validate::Parts;
use crate::core::{Automaton, Label, ValidationError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing automata with a fluent API.
///
/// Collects parts without checking them; [`build`](Self::build) validates
/// through [`Automaton::new`] and [`diagnose`](Self::diagnose) reports every
/// problem at once.
///
/// # Example
///
/// ```rust
/// use dfakit::builder::AutomatonBuilder;
///
/// let dfa = AutomatonBuilder::new()
///     .states(["q0", "q1"])
///     .alphabet(['0', '1'])
///     .transition("q0", '0', "q0")
///     .transition("q0", '1', "q1")
///     .transition("q1", '0', "q1")
///     .transition("q1", '1', "q0")
///     .start("q0")
///     .accept("q1")
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.accepts("0101".chars()), Ok(false));
/// ```
#[derive(Debug, Clone)]
pub struct AutomatonBuilder<S: Label, A: Label> {
    states: Vec<S>,
    alphabet: Vec<A>,
    transitions: Vec<((S, A), S)>,
    start: Option<S>,
    accepting: Vec<S>,
}

impl<S: Label, A: Label> AutomatonBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            start: None,
            accepting: Vec::new(),
        }
    }

    /// Start from an existing automaton's parts.
    pub fn from_automaton(automaton: &Automaton<S, A>) -> Self {
        Self {
            states: automaton.states().iter().cloned().collect(),
            alphabet: automaton.alphabet().iter().cloned().collect(),
            transitions: automaton
                .transitions()
                .map(|(from, symbol, to)| ((from.clone(), symbol.clone()), to.clone()))
                .collect(),
            start: Some(automaton.start().clone()),
            accepting: automaton.accepting().iter().cloned().collect(),
        }
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Add `δ(from, symbol) = to`.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push(((from, symbol), to));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    pub fn accept(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Clear the accepting set, keeping everything else.
    pub fn clear_accepting(mut self) -> Self {
        self.accepting.clear();
        self
    }

    /// Report every structural problem, not only the first.
    ///
    /// A missing start state is not a structural problem and is only
    /// reported by [`build`](Self::build).
    pub fn diagnose(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let parts = Parts::collect(
            self.states.iter().cloned(),
            self.alphabet.iter().cloned(),
            self.transitions.iter().cloned(),
            self.accepting.iter().cloned(),
        );
        let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = parts
            .violations(self.start.as_ref())
            .into_iter()
            .map(Validation::fail)
            .collect();
        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or any invariant fails.
    pub fn build(self) -> Result<Automaton<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        Ok(Automaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accepting,
        )?)
    }
}

impl<S: Label, A: Label> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> AutomatonBuilder<&'static str, char> {
        AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(['a', 'b'])
            .transition("q0", 'a', "q0")
            .transition("q0", 'b', "q1")
            .transition("q1", 'a', "q1")
            .transition("q1", 'b', "q0")
    }

    #[test]
    fn builder_requires_start_state() {
        let result = two_by_two().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingStartState);
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let dfa = two_by_two().start("q0").accept("q1").build().unwrap();
        assert_eq!(dfa.start(), &"q0");
        assert_eq!(dfa.accepts("ab".chars()), Ok(true));
        assert_eq!(dfa.accepts("abb".chars()), Ok(false));
    }

    #[test]
    fn build_surfaces_validation_error() {
        let result = AutomatonBuilder::new()
            .state("q0")
            .symbol('a')
            .start("q0")
            .build();
        assert!(matches!(
            result,
            Err(BuildError::Validation(ValidationError::MissingTransition { .. }))
        ));
    }

    #[test]
    fn diagnose_accumulates_all_violations() {
        let builder = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(['a', 'b'])
            .transition("q0", 'a', "q9")
            .start("qx")
            .accept("qy");

        match builder.diagnose() {
            Validation::Failure(errors) => {
                // start, accepting, three missing pairs, one bad target
                assert_eq!(errors.len(), 6);

                let has_start = errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::StartNotInStates { .. }));
                let has_accepting = errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::AcceptingNotInStates { .. }));
                let has_target = errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::InvalidTarget { .. }));

                assert!(has_start);
                assert!(has_accepting);
                assert!(has_target);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn diagnose_passes_for_valid_parts() {
        let builder = two_by_two().start("q0");
        assert!(builder.diagnose().is_success());
    }

    #[test]
    fn from_automaton_rebuilds_with_new_accepting() {
        let dfa = two_by_two().start("q0").accept("q1").build().unwrap();
        let flipped = AutomatonBuilder::from_automaton(&dfa)
            .clear_accepting()
            .accept("q0")
            .build()
            .unwrap();

        assert_eq!(dfa.accepts("b".chars()), Ok(true));
        assert_eq!(flipped.accepts("b".chars()), Ok(false));
    }
}
