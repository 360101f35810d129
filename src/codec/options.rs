//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Options controlling the interchange text.
///
/// Deserializable with defaults for every field, so it can sit inside a
/// host application's own configuration file.
///
/// ```rust
/// use dfakit::codec::CodecOptions;
///
/// let options: CodecOptions = serde_json::from_str(r#"{ "pretty": false }"#).unwrap();
/// assert_eq!(options.separator, ',');
/// assert!(!options.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Character joining state and symbol in transition keys. Labels may not
    /// contain it.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Indent output with two spaces and one field per line.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_separator() -> char {
    ','
}

fn default_pretty() -> bool {
    true
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            pretty: default_pretty(),
        }
    }
}

impl CodecOptions {
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
