//! The validated, immutable automaton.

use super::error::ValidationError;
use super::label::Label;
use super::validate::{Parts, Table};
use std::collections::BTreeSet;
use std::fmt;

/// A deterministic finite automaton `(Q, Σ, δ, q0, F)`.
///
/// An `Automaton` can only be obtained through [`Automaton::new`] (or the
/// builder and codec, which call it), so every value satisfies:
///
/// - the start state is a member of `states`
/// - `accepting` is a subset of `states`
/// - `δ` is defined for every pair in `states × alphabet` and only there
/// - every destination of `δ` is a member of `states`
///
/// There is no mutation API. A variant with a different accepting set is a
/// new value, see [`Automaton::with_accepting`].
///
/// # Example
///
/// ```rust
/// use dfakit::core::Automaton;
///
/// // Odd number of 'b'
/// let dfa = Automaton::new(
///     ["even", "odd"],
///     ['a', 'b'],
///     [
///         (("even", 'a'), "even"),
///         (("even", 'b'), "odd"),
///         (("odd", 'a'), "odd"),
///         (("odd", 'b'), "even"),
///     ],
///     "even",
///     ["odd"],
/// )
/// .unwrap();
///
/// assert_eq!(dfa.step(&"even", &'b'), Some(&"odd"));
/// assert!(dfa.is_accepting(&"odd"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Label, A: Label> {
    states: BTreeSet<S>,
    alphabet: BTreeSet<A>,
    table: Table<S, A>,
    start: S,
    accepting: BTreeSet<S>,
}

impl<S: Label, A: Label> Automaton<S, A> {
    /// Validate the five parts and build an automaton.
    ///
    /// Fails with the first violated invariant, checked in this order:
    /// start membership, accepting subset, totality, target validity,
    /// transition domain, conflicting duplicates. Transition entries for a
    /// state or symbol outside the declared sets are rejected, not ignored.
    pub fn new<Q, E, T, F>(
        states: Q,
        alphabet: E,
        transitions: T,
        start: S,
        accepting: F,
    ) -> Result<Self, ValidationError>
    where
        Q: IntoIterator<Item = S>,
        E: IntoIterator<Item = A>,
        T: IntoIterator<Item = ((S, A), S)>,
        F: IntoIterator<Item = S>,
    {
        let parts = Parts::collect(states, alphabet, transitions, accepting);

        if let Some(err) = parts.violations(Some(&start)).into_iter().next() {
            tracing::debug!(%err, "automaton rejected");
            return Err(err);
        }

        tracing::debug!(
            states = parts.states.len(),
            symbols = parts.alphabet.len(),
            accepting = parts.accepting.len(),
            "automaton validated"
        );

        Ok(Self {
            states: parts.states,
            alphabet: parts.alphabet,
            table: parts.table,
            start,
            accepting: parts.accepting,
        })
    }

    /// Build a copy of this automaton with a different accepting set.
    ///
    /// The result goes through full validation; `self` is unchanged.
    pub fn with_accepting<F>(&self, accepting: F) -> Result<Self, ValidationError>
    where
        F: IntoIterator<Item = S>,
    {
        Self::new(
            self.states.iter().cloned(),
            self.alphabet.iter().cloned(),
            self.transitions()
                .map(|(from, symbol, to)| ((from.clone(), symbol.clone()), to.clone())),
            self.start.clone(),
            accepting,
        )
    }

    /// All states, in canonical order.
    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    /// The input alphabet, in canonical order.
    pub fn alphabet(&self) -> &BTreeSet<A> {
        &self.alphabet
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    /// Accepting states, in canonical order. May be empty.
    pub fn accepting(&self) -> &BTreeSet<S> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    pub fn has_symbol(&self, symbol: &A) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Look up `δ(state, symbol)`.
    ///
    /// Always `Some` for a pair in `states × alphabet`; `None` for anything
    /// outside that domain.
    pub fn step(&self, state: &S, symbol: &A) -> Option<&S> {
        self.table.get(state).and_then(|row| row.get(symbol))
    }

    /// Iterate `(from, symbol, to)` triples in canonical order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &A, &S)> + '_ {
        self.states.iter().flat_map(move |from| {
            self.alphabet
                .iter()
                .filter_map(move |symbol| self.step(from, symbol).map(|to| (from, symbol, to)))
        })
    }

    /// Number of transition rules, always `|states| * |alphabet|`.
    pub fn transition_count(&self) -> usize {
        self.table.values().map(|row| row.len()).sum()
    }
}

fn join<L: Label>(labels: &BTreeSet<L>) -> String {
    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<S: Label, A: Label> fmt::Display for Automaton<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFA(")?;
        writeln!(f, "  States: {{{}}}", join(&self.states))?;
        writeln!(f, "  Alphabet: {{{}}}", join(&self.alphabet))?;
        writeln!(f, "  Start: {}", self.start)?;
        writeln!(f, "  Final: {{{}}}", join(&self.accepting))?;
        writeln!(f, "  Transitions: {} rules", self.transition_count())?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odd_b() -> Automaton<&'static str, char> {
        Automaton::new(
            ["q_even", "q_odd"],
            ['a', 'b'],
            [
                (("q_even", 'a'), "q_even"),
                (("q_even", 'b'), "q_odd"),
                (("q_odd", 'a'), "q_odd"),
                (("q_odd", 'b'), "q_even"),
            ],
            "q_even",
            ["q_odd"],
        )
        .unwrap()
    }

    #[test]
    fn new_accepts_well_formed_parts() {
        let dfa = odd_b();
        assert_eq!(dfa.start(), &"q_even");
        assert_eq!(dfa.states().len(), 2);
        assert_eq!(dfa.alphabet().len(), 2);
        assert_eq!(dfa.transition_count(), 4);
        assert!(dfa.is_accepting(&"q_odd"));
        assert!(!dfa.is_accepting(&"q_even"));
    }

    #[test]
    fn start_must_be_a_state() {
        let result = Automaton::new(["q0"], ['a'], [(("q0", 'a'), "q0")], "q1", []);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::StartNotInStates {
                start: "q1".to_string()
            }
        );
    }

    #[test]
    fn accepting_must_be_subset() {
        let result = Automaton::new(["q0"], ['a'], [(("q0", 'a'), "q0")], "q0", ["qx"]);
        assert!(matches!(
            result,
            Err(ValidationError::AcceptingNotInStates { ref state }) if state == "qx"
        ));
    }

    #[test]
    fn start_is_checked_before_totality() {
        let result = Automaton::new(["q0"], ['a'], Vec::new(), "qx", []);
        assert!(matches!(result, Err(ValidationError::StartNotInStates { .. })));
    }

    #[test]
    fn missing_transition_is_reported() {
        let result = Automaton::new(
            ["q0", "q1"],
            ['a', 'b'],
            [
                (("q0", 'a'), "q1"),
                (("q0", 'b'), "q0"),
                (("q1", 'a'), "q0"),
            ],
            "q0",
            ["q1"],
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingTransition {
                state: "q1".to_string(),
                symbol: "b".to_string(),
                missing: 1,
            }
        );
    }

    #[test]
    fn target_must_be_a_state() {
        let result = Automaton::new(["q0"], ['a'], [(("q0", 'a'), "q5")], "q0", []);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidTarget { ref target, .. }) if target == "q5"
        ));
    }

    #[test]
    fn out_of_domain_entries_are_rejected() {
        let result = Automaton::new(
            ["q0"],
            ['a'],
            [(("q0", 'a'), "q0"), (("q0", 'z'), "q0")],
            "q0",
            [],
        );
        assert!(matches!(
            result,
            Err(ValidationError::UnknownTransitionSymbol { ref symbol, .. }) if symbol == "z"
        ));
    }

    #[test]
    fn empty_alphabet_needs_no_transitions() {
        let dfa: Automaton<&str, char> = Automaton::new(["q0"], [], [], "q0", ["q0"]).unwrap();
        assert_eq!(dfa.transition_count(), 0);
        assert!(dfa.is_accepting(&"q0"));
    }

    #[test]
    fn empty_accepting_set_is_ordinary() {
        let dfa = odd_b().with_accepting([]).unwrap();
        assert!(dfa.accepting().is_empty());
    }

    #[test]
    fn step_is_total_over_domain() {
        let dfa = odd_b();
        for state in dfa.states() {
            for symbol in dfa.alphabet() {
                let next = dfa.step(state, symbol).unwrap();
                assert!(dfa.states().contains(next));
            }
        }
        assert_eq!(dfa.step(&"q_even", &'c'), None);
        assert_eq!(dfa.step(&"nowhere", &'a'), None);
    }

    #[test]
    fn with_accepting_leaves_original_unchanged() {
        let dfa = odd_b();
        let flipped = dfa.with_accepting(["q_even"]).unwrap();

        assert!(dfa.is_accepting(&"q_odd"));
        assert!(flipped.is_accepting(&"q_even"));
        assert!(!flipped.is_accepting(&"q_odd"));
        assert_eq!(flipped.transition_count(), dfa.transition_count());
    }

    #[test]
    fn with_accepting_is_validated() {
        let result = odd_b().with_accepting(["q_missing"]);
        assert!(matches!(result, Err(ValidationError::AcceptingNotInStates { .. })));
    }

    #[test]
    fn transitions_iterate_in_canonical_order() {
        let dfa = odd_b();
        let triples: Vec<_> = dfa.transitions().collect();
        assert_eq!(
            triples,
            vec![
                (&"q_even", &'a', &"q_even"),
                (&"q_even", &'b', &"q_odd"),
                (&"q_odd", &'a', &"q_odd"),
                (&"q_odd", &'b', &"q_even"),
            ]
        );
    }

    #[test]
    fn display_summarizes_automaton() {
        let text = odd_b().to_string();
        assert!(text.contains("States: {q_even, q_odd}"));
        assert!(text.contains("Alphabet: {a, b}"));
        assert!(text.contains("Start: q_even"));
        assert!(text.contains("Final: {q_odd}"));
        assert!(text.contains("Transitions: 4 rules"));
    }

    #[test]
    fn automaton_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton<String, char>>();
    }
}
