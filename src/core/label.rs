//! Label trait for automaton states and input symbols.
//!
//! States and symbols carry no meaning beyond identity. Any value that can be
//! compared, hashed, ordered and displayed can serve as either.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state and symbol labels.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into the automaton at construction
/// - `Eq` + `Hash`: labels key the transition table
/// - `Ord`: provides the canonical order used for diagnostics and encoding
/// - `Debug` + `Display`: labels are rendered in errors and in the
///   interchange format
/// - `Send` + `Sync`: automata are shared read-only across threads
///
/// The trait is implemented for every type meeting these bounds, so
/// `String`, `&'static str`, `char` and the integer types work out of the
/// box.
///
/// # Example
///
/// ```rust
/// use dfakit::core::Label;
///
/// fn describe<L: Label>(label: &L) -> String {
///     label.to_string()
/// }
///
/// assert_eq!(describe(&"q0"), "q0");
/// assert_eq!(describe(&'a'), "a");
/// assert_eq!(describe(&7u32), "7");
/// ```
pub trait Label: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}
