//! Interchange codec error types.

use crate::core::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// The document is not a well-formed interchange document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Not valid JSON at all
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    /// Top level is not a JSON object
    #[error("Document must be a JSON object")]
    NotAnObject,

    /// One or more required top-level fields are absent
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field holds the wrong JSON type
    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// A transition key does not split into exactly one state and one symbol
    #[error("Invalid transition key '{key}': expected <state>{separator}<symbol>")]
    InvalidTransitionKey { key: String, separator: char },

    /// A label could not be parsed into the requested label type
    #[error("Invalid label '{label}' in '{field}'")]
    InvalidLabel { field: &'static str, label: String },
}

/// Errors that can occur while encoding, decoding or persisting an automaton.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Fields parsed but describe an invalid automaton
    #[error("Invalid automaton: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization of the document failed
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
