//! Step-by-step DFA Debugger
//!
//! This example traces binary numbers through a divisible-by-three
//! automaton, then exports and re-imports it through the interchange format.
//!
//! Key concepts:
//! - Lazy traces that stop at the first invalid symbol
//! - Visited-state paths
//! - Canonical JSON export
//!
//! Run with: RUST_LOG=dfakit=trace cargo run --example debugger

use dfakit::codec;
use dfakit::core::Automaton;
use dfakit::dfa;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_trace(dfa: &Automaton<&'static str, char>, word: &str) {
    let input: Vec<char> = word.chars().collect();
    println!("Input: {word:?}");
    for record in dfa.trace(&input) {
        match record {
            Ok(record) => {
                let processed: String = record.processed.iter().collect();
                let remaining: String = record.remaining.iter().collect();
                let line = record.to_string();
                println!("  {line:<50} [{processed}|{remaining}]");
            }
            Err(err) => println!("  error: {err}"),
        }
    }
    println!();
}

fn main() -> dfakit::Result<()> {
    init_logging();

    println!("=== DFA Debugger ===\n");

    let dfa = dfa! {
        states: ["q0", "q1", "q2"],
        alphabet: ['0', '1'],
        start: "q0",
        accepting: ["q0"],
        transitions: {
            ("q0", '0') => "q0",
            ("q0", '1') => "q1",
            ("q1", '0') => "q2",
            ("q1", '1') => "q0",
            ("q2", '0') => "q1",
            ("q2", '1') => "q2",
        }
    }?;

    println!("{dfa}\n");

    for word in ["110", "111", "", "10x1"] {
        print_trace(&dfa, word);
    }

    let run = dfa.run_with_path("1001".chars())?;
    let path: Vec<&str> = run.states.iter().map(|s| **s).collect();
    println!("Path for \"1001\": {}", path.join(" → "));
    println!("Accepted: {}\n", run.accepted);

    let text = codec::encode(&dfa)?;
    println!("Exported:\n{text}\n");

    let imported: Automaton<String, char> = codec::decode(&text)?;
    println!("Re-imported accepts \"1001\": {}", imported.accepts("1001".chars())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
