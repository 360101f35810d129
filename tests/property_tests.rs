//! Property-based tests for construction, execution and interchange.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use dfakit::codec;
use dfakit::core::Automaton;
use dfakit::engine::{accepts, run_with_path, trace};
use proptest::prelude::*;

const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

/// Raw parts of a random total automaton over `q0..qn` and the first `k`
/// symbols of `SYMBOLS`.
#[derive(Clone, Debug)]
struct Spec {
    states: usize,
    symbols: usize,
    targets: Vec<usize>,
    accepting: Vec<bool>,
}

impl Spec {
    fn build(&self) -> Automaton<String, char> {
        let names: Vec<String> = (0..self.states).map(|i| format!("q{i}")).collect();
        let alphabet = &SYMBOLS[..self.symbols];

        let transitions = names.iter().enumerate().flat_map(|(i, from)| {
            alphabet.iter().enumerate().map(move |(j, symbol)| {
                let to = self.targets[i * self.symbols + j];
                ((from.clone(), *symbol), format!("q{to}"))
            })
        });
        let accepting = names
            .iter()
            .zip(&self.accepting)
            .filter(|(_, accept)| **accept)
            .map(|(name, _)| name.clone());

        Automaton::new(
            names.clone(),
            alphabet.iter().copied(),
            transitions,
            names[0].clone(),
            accepting,
        )
        .unwrap()
    }
}

prop_compose! {
    fn arbitrary_spec()(states in 1usize..6, symbols in 1usize..=3)
        (
            targets in prop::collection::vec(0..states, states * symbols),
            accepting in prop::collection::vec(any::<bool>(), states),
            states in Just(states),
            symbols in Just(symbols),
        ) -> Spec {
        Spec { states, symbols, targets, accepting }
    }
}

prop_compose! {
    fn arbitrary_case()(spec in arbitrary_spec())
        (
            word in prop::collection::vec(0..spec.symbols, 0..12),
            spec in Just(spec),
        ) -> (Spec, Vec<char>) {
        let word = word.into_iter().map(|i| SYMBOLS[i]).collect();
        (spec, word)
    }
}

proptest! {
    #[test]
    fn step_is_total_and_closed(spec in arbitrary_spec()) {
        let dfa = spec.build();
        for state in dfa.states() {
            for symbol in dfa.alphabet() {
                let next = dfa.step(state, symbol);
                prop_assert!(next.is_some());
                prop_assert!(dfa.states().contains(next.unwrap()));
            }
        }
        prop_assert_eq!(dfa.transition_count(), spec.states * spec.symbols);
    }

    #[test]
    fn accepts_is_deterministic((spec, word) in arbitrary_case()) {
        let dfa = spec.build();
        let first = accepts(&dfa, &word);
        let second = accepts(&dfa, &word);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn path_matches_accepts((spec, word) in arbitrary_case()) {
        let dfa = spec.build();
        let run = run_with_path(&dfa, &word).unwrap();

        prop_assert_eq!(run.states.len(), word.len() + 1);
        prop_assert_eq!(run.states[0], dfa.start());
        prop_assert_eq!(Ok(run.accepted), accepts(&dfa, &word));
        prop_assert_eq!(run.accepted, dfa.is_accepting(run.final_state()));
    }

    #[test]
    fn trace_has_len_plus_two_records((spec, word) in arbitrary_case()) {
        let dfa = spec.build();
        let records: Vec<_> = trace(&dfa, &word)
            .collect::<Result<_, _>>()
            .unwrap();

        prop_assert_eq!(records.len(), word.len() + 2);
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(record.index, i);
        }
        for i in 1..=word.len() {
            prop_assert_eq!(records[i].processed, &word[..i]);
            prop_assert_eq!(records[i].remaining, &word[i..]);
            prop_assert_eq!(records[i].symbol, Some(&word[i - 1]));
        }

        let terminal = records.last().unwrap();
        prop_assert!(terminal.is_final);
        prop_assert_eq!(terminal.accepted, Some(accepts(&dfa, &word).unwrap()));
        prop_assert!(records[..records.len() - 1].iter().all(|r| !r.is_final));
    }

    #[test]
    fn trace_path_matches_run_path((spec, word) in arbitrary_case()) {
        let dfa = spec.build();
        let run = run_with_path(&dfa, &word).unwrap();
        let visited: Vec<&String> = trace(&dfa, &word)
            .skip(1)
            .take(word.len())
            .map(|r| r.unwrap().next.unwrap())
            .collect();

        prop_assert_eq!(&visited[..], &run.states[1..]);
    }

    #[test]
    fn round_trip_preserves_language((spec, word) in arbitrary_case()) {
        let dfa = spec.build();
        let text = codec::encode(&dfa).unwrap();
        let decoded: Automaton<String, char> = codec::decode(&text).unwrap();

        prop_assert_eq!(accepts(&dfa, &word), accepts(&decoded, &word));
        prop_assert_eq!(codec::encode(&decoded).unwrap(), text);
    }

    #[test]
    fn bad_symbol_fails_at_its_position(
        (spec, word) in arbitrary_case(),
        insert_at in any::<prop::sample::Index>(),
    ) {
        let dfa = spec.build();
        let position = insert_at.index(word.len() + 1);
        let mut bad = word.clone();
        bad.insert(position, 'z');

        let err = accepts(&dfa, &bad).unwrap_err();
        prop_assert_eq!(err.position, position);
        prop_assert_eq!(err.symbol.as_str(), "z");

        let err = run_with_path(&dfa, &bad).unwrap_err();
        prop_assert_eq!(err.position, position);

        // Every record before the bad symbol is produced, then the error.
        let records: Vec<_> = trace(&dfa, &bad).collect();
        prop_assert_eq!(records.len(), position + 2);
        prop_assert!(records[..=position].iter().all(|r| r.is_ok()));
        prop_assert!(records[position + 1].is_err());
    }
}
