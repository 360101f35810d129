//! Dfakit: deterministic finite automata with a validated core
//!
//! An automaton is built once, checked eagerly and never mutated. Execution
//! and interchange only borrow it, so one automaton can be shared freely
//! between threads and callers.
//!
//! # Core Concepts
//!
//! - **Automaton**: the validated 5-tuple `(Q, Σ, δ, q0, F)` in [`core`]
//! - **Engine**: acceptance, visited paths and step traces in [`engine`]
//! - **Codec**: the canonical JSON interchange format in [`codec`]
//! - **Builder**: a fluent builder and the [`dfa!`] macro in [`builder`]
//!
//! # Example
//!
//! ```rust
//! use dfakit::core::Automaton;
//! use dfakit::codec;
//!
//! // Binary numbers divisible by three
//! let dfa = Automaton::new(
//!     ["q0", "q1", "q2"],
//!     ['0', '1'],
//!     [
//!         (("q0", '0'), "q0"),
//!         (("q0", '1'), "q1"),
//!         (("q1", '0'), "q2"),
//!         (("q1", '1'), "q0"),
//!         (("q2", '0'), "q1"),
//!         (("q2", '1'), "q2"),
//!     ],
//!     "q0",
//!     ["q0"],
//! )
//! .unwrap();
//!
//! assert_eq!(dfa.accepts("110".chars()), Ok(true));
//! assert_eq!(dfa.accepts("111".chars()), Ok(false));
//!
//! let input: Vec<char> = "110".chars().collect();
//! for record in dfa.trace(&input) {
//!     println!("{}", record.unwrap());
//! }
//!
//! let text = codec::encode(&dfa).unwrap();
//! let copy: Automaton<String, char> = codec::decode(&text).unwrap();
//! assert_eq!(copy.accepts("1001".chars()), Ok(true));
//! ```

pub mod builder;
pub mod codec;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use codec::{decode, encode, CodecError, FormatError};
pub use crate::core::{Automaton, Label, ValidationError};
pub use engine::{accepts, run_with_path, trace, RunPath, StepRecord, SymbolError, Trace};
pub use error::{Error, Result};
