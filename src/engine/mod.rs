//! Execution engine.
//!
//! Runs input against a borrowed automaton. Three entry points share one
//! traversal rule: start at the start state, check each symbol against the
//! alphabet before applying `δ`, and stop at the first symbol that fails.
//!
//! - [`accepts`]: the verdict only
//! - [`run_with_path`]: the verdict and every visited state
//! - [`trace`]: a lazy stream of [`StepRecord`]s
//!
//! None of them mutate the automaton, so one automaton can serve many
//! concurrent runs.

mod error;
mod run;
mod trace;

pub use error::SymbolError;
pub use run::{accepts, run_with_path, RunPath};
pub use trace::{trace, StepRecord, Trace};
