//! The on-disk document shape and its conversion to and from labels.

use super::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Required top-level fields, in document order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "states",
    "alphabet",
    "transitions",
    "start_state",
    "final_states",
];

/// Interchange document. Field order here is the field order on output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Document {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transitions: Transitions,
    pub start_state: String,
    pub final_states: Vec<String>,
}

/// The transition table in one of its two written forms.
///
/// `Keyed` is the `{"<state><sep><symbol>": "<next>"}` map, sorted by key.
/// `Listed` holds `[state, symbol, next]` triples in canonical label order
/// and is used when some label contains the separator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Transitions {
    Keyed(BTreeMap<String, String>),
    Listed(Vec<[String; 3]>),
}

impl Transitions {
    pub(crate) fn len(&self) -> usize {
        match self {
            Transitions::Keyed(entries) => entries.len(),
            Transitions::Listed(entries) => entries.len(),
        }
    }

    /// Every entry as `(state, symbol, next)` text.
    pub(crate) fn entries(
        &self,
        separator: char,
    ) -> Result<Vec<(&str, &str, &str)>, FormatError> {
        match self {
            Transitions::Keyed(entries) => entries
                .iter()
                .map(|(key, next)| {
                    split_key(key, separator).map(|(state, symbol)| (state, symbol, next.as_str()))
                })
                .collect(),
            Transitions::Listed(entries) => Ok(entries
                .iter()
                .map(|[state, symbol, next]| (state.as_str(), symbol.as_str(), next.as_str()))
                .collect()),
        }
    }
}

impl Document {
    /// Check presence and JSON types of every field, then deserialize.
    pub(crate) fn from_value(value: Value) -> Result<Self, FormatError> {
        let Value::Object(object) = &value else {
            return Err(FormatError::NotAnObject);
        };

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(FormatError::MissingFields(missing));
        }

        expect_string_list(object, "states")?;
        expect_string_list(object, "alphabet")?;
        expect_transition_table(object, "transitions")?;
        if !object["start_state"].is_string() {
            return Err(FormatError::WrongType {
                field: "start_state",
                expected: "a string",
            });
        }
        expect_string_list(object, "final_states")?;

        serde_json::from_value(value).map_err(|e| FormatError::Syntax(e.to_string()))
    }
}

fn expect_string_list(object: &Map<String, Value>, field: &'static str) -> Result<(), FormatError> {
    match &object[field] {
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
        _ => Err(FormatError::WrongType {
            field,
            expected: "a list of strings",
        }),
    }
}

fn expect_transition_table(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<(), FormatError> {
    let is_triple = |entry: &Value| match entry {
        Value::Array(parts) => parts.len() == 3 && parts.iter().all(Value::is_string),
        _ => false,
    };
    match &object[field] {
        Value::Object(entries) if entries.values().all(Value::is_string) => Ok(()),
        Value::Array(entries) if entries.iter().all(is_triple) => Ok(()),
        _ => Err(FormatError::WrongType {
            field,
            expected: "an object of strings or a list of [state, symbol, next] triples",
        }),
    }
}

/// Parse one label, naming the field it came from on failure.
pub(crate) fn parse_label<L: FromStr>(field: &'static str, text: &str) -> Result<L, FormatError> {
    text.parse().map_err(|_| FormatError::InvalidLabel {
        field,
        label: text.to_string(),
    })
}

/// Split `<state><sep><symbol>` on its only separator.
pub(crate) fn split_key(key: &str, separator: char) -> Result<(&str, &str), FormatError> {
    match key.split_once(separator) {
        Some((state, symbol)) if !symbol.contains(separator) => Ok((state, symbol)),
        _ => Err(FormatError::InvalidTransitionKey {
            key: key.to_string(),
            separator,
        }),
    }
}

pub(crate) fn join_key(state: &str, symbol: &str, separator: char) -> String {
    format!("{state}{separator}{symbol}")
}
