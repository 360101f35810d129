//! Canonical JSON interchange format.
//!
//! Documents have the shape
//!
//! ```json
//! {
//!   "states": ["q0", "q1"],
//!   "alphabet": ["a", "b"],
//!   "transitions": { "q0,a": "q1", "q0,b": "q0", "q1,a": "q0", "q1,b": "q1" },
//!   "start_state": "q0",
//!   "final_states": ["q0"]
//! }
//! ```
//!
//! Lists are sorted by the label type's order and transition keys are sorted
//! as text, so set-equal automata encode to identical bytes. Labels are
//! written with `Display` and read back with `FromStr`.
//!
//! When a state or symbol label contains the key separator, `transitions` is
//! written as a list of `[state, symbol, next]` triples instead, in canonical
//! label order. Decoding accepts either form. A keyed entry must split on
//! exactly one separator.
//!
//! Decoding always goes through [`Automaton::new`], so a decoded automaton
//! satisfies every invariant.

mod document;
pub mod error;
mod options;

pub use document::REQUIRED_FIELDS;
pub use error::{CodecError, FormatError};
pub use options::CodecOptions;

use crate::core::{Automaton, Label};
use document::{join_key, parse_label, Document, Transitions};
use std::path::Path;
use std::str::FromStr;

/// Encoder/decoder carrying [`CodecOptions`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    fn to_document<S: Label, A: Label>(&self, automaton: &Automaton<S, A>) -> Document {
        let separator = self.options.separator;
        let states: Vec<String> = automaton.states().iter().map(ToString::to_string).collect();
        let alphabet: Vec<String> = automaton.alphabet().iter().map(ToString::to_string).collect();

        let keyable = !states
            .iter()
            .chain(&alphabet)
            .any(|label| label.contains(separator));
        let entries = automaton
            .transitions()
            .map(|(from, symbol, to)| [from.to_string(), symbol.to_string(), to.to_string()]);
        let transitions = if keyable {
            Transitions::Keyed(
                entries
                    .map(|[from, symbol, to]| (join_key(&from, &symbol, separator), to))
                    .collect(),
            )
        } else {
            tracing::debug!(%separator, "label contains key separator, listing transitions");
            Transitions::Listed(entries.collect())
        };

        Document {
            states,
            alphabet,
            transitions,
            start_state: automaton.start().to_string(),
            final_states: automaton.accepting().iter().map(ToString::to_string).collect(),
        }
    }

    /// Render `automaton` as canonical interchange text.
    pub fn encode<S: Label, A: Label>(
        &self,
        automaton: &Automaton<S, A>,
    ) -> Result<String, CodecError> {
        let document = self.to_document(automaton);
        let text = if self.options.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        tracing::debug!(
            states = document.states.len(),
            transitions = document.transitions.len(),
            bytes = text.len(),
            "automaton encoded"
        );
        Ok(text)
    }

    /// Parse interchange text and validate it into an automaton.
    pub fn decode<S, A>(&self, text: &str) -> Result<Automaton<S, A>, CodecError>
    where
        S: Label + FromStr,
        A: Label + FromStr,
    {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| FormatError::Syntax(e.to_string()))?;
        let document = Document::from_value(value)?;

        let states = document
            .states
            .iter()
            .map(|s| parse_label::<S>("states", s))
            .collect::<Result<Vec<_>, _>>()?;
        let alphabet = document
            .alphabet
            .iter()
            .map(|a| parse_label::<A>("alphabet", a))
            .collect::<Result<Vec<_>, _>>()?;
        let transitions = document
            .transitions
            .entries(self.options.separator)?
            .into_iter()
            .map(|(from, symbol, to)| -> Result<((S, A), S), FormatError> {
                Ok((
                    (
                        parse_label::<S>("transitions", from)?,
                        parse_label::<A>("transitions", symbol)?,
                    ),
                    parse_label::<S>("transitions", to)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let start = parse_label::<S>("start_state", &document.start_state)?;
        let accepting = document
            .final_states
            .iter()
            .map(|s| parse_label::<S>("final_states", s))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            states = states.len(),
            transitions = transitions.len(),
            "interchange document parsed"
        );

        Ok(Automaton::new(states, alphabet, transitions, start, accepting)?)
    }

    /// Encode `automaton` and write it to `path`.
    pub fn write_file<S: Label, A: Label>(
        &self,
        path: impl AsRef<Path>,
        automaton: &Automaton<S, A>,
    ) -> Result<(), CodecError> {
        let path = path.as_ref();
        let text = self.encode(automaton)?;
        std::fs::write(path, text).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "automaton exported");
        Ok(())
    }

    /// Read `path` and decode it.
    pub fn read_file<S, A>(&self, path: impl AsRef<Path>) -> Result<Automaton<S, A>, CodecError>
    where
        S: Label + FromStr,
        A: Label + FromStr,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let automaton = self.decode(&text)?;
        tracing::info!(path = %path.display(), "automaton imported");
        Ok(automaton)
    }
}

/// Encode with default options.
///
/// # Example
///
/// ```rust
/// use dfakit::codec::{decode, encode};
/// use dfakit::core::Automaton;
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
/// let text = encode(&dfa).unwrap();
/// let back: Automaton<String, char> = decode(&text).unwrap();
/// assert_eq!(back.accepts("aaa".chars()), Ok(true));
/// ```
pub fn encode<S: Label, A: Label>(automaton: &Automaton<S, A>) -> Result<String, CodecError> {
    Codec::default().encode(automaton)
}

/// Decode with default options.
pub fn decode<S, A>(text: &str) -> Result<Automaton<S, A>, CodecError>
where
    S: Label + FromStr,
    A: Label + FromStr,
{
    Codec::default().decode(text)
}

/// Write `automaton` to `path` with default options.
pub fn write_file<S: Label, A: Label>(
    path: impl AsRef<Path>,
    automaton: &Automaton<S, A>,
) -> Result<(), CodecError> {
    Codec::default().write_file(path, automaton)
}

/// Read an automaton from `path` with default options.
pub fn read_file<S, A>(path: impl AsRef<Path>) -> Result<Automaton<S, A>, CodecError>
where
    S: Label + FromStr,
    A: Label + FromStr,
{
    Codec::default().read_file(path)
}
