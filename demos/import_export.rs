//! Import/Export Example
//!
//! This example writes a divisible-by-three automaton to disk, reads it
//! back, derives a remainder-one variant and exports that as well.
//!
//! Key concepts:
//! - Scoped file I/O through `write_file` / `read_file`
//! - Typed labels chosen at import time
//! - Rebuilding with a different accepting set
//!
//! Run with: RUST_LOG=dfakit=info cargo run --example import_export

use dfakit::codec;
use dfakit::core::Automaton;
use dfakit::dfa;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EVEN_A: &str = r#"{
  "states": ["q0", "q1"],
  "alphabet": ["a", "b"],
  "transitions": { "q0,a": "q1", "q0,b": "q0", "q1,a": "q0", "q1,b": "q1" },
  "start_state": "q0",
  "final_states": ["q0"]
}"#;

const BINARY_CASES: [(&str, u32); 5] = [("0", 0), ("11", 3), ("110", 6), ("111", 7), ("1001", 9)];

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dfakit-{}-{name}", std::process::id()))
}

fn mark(accepted: bool) -> &'static str {
    if accepted {
        "✓ ACCEPT"
    } else {
        "✗ REJECT"
    }
}

fn cleanup(paths: &[&Path]) {
    for path in paths {
        if let Err(err) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), %err, "could not remove scratch file");
        }
    }
}

fn main() -> dfakit::Result<()> {
    init_logging();

    println!("=== Import/Export Example ===\n");

    // 1. Create and export
    println!("1. Creating and exporting a divisible-by-three automaton:");
    let div3 = dfa! {
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
    println!("{div3}");

    let div3_path = scratch("divisible_by_3.json");
    codec::write_file(&div3_path, &div3)?;
    println!("   Written to {}\n", div3_path.display());

    for (binary, decimal) in BINARY_CASES {
        println!(
            "   {} | {binary:6} = {decimal:2} | divisible by 3: {}",
            mark(div3.accepts(binary.chars())?),
            decimal % 3 == 0
        );
    }

    // 2. Import a hand-written document
    println!("\n2. Importing an even-number-of-a automaton:");
    let even_a_path = scratch("even_a.json");
    if let Err(source) = std::fs::write(&even_a_path, EVEN_A) {
        return Err(codec::CodecError::Io {
            path: even_a_path,
            source,
        }
        .into());
    }
    let even_a: Automaton<String, char> = codec::read_file(&even_a_path)?;
    println!("{even_a}");

    for word in ["", "a", "aa", "aaa", "aaaa", "ababab"] {
        let count = word.chars().filter(|c| *c == 'a').count();
        println!(
            "   {} | {:8} | {count} a's",
            mark(even_a.accepts(word.chars())?),
            format!("'{word}'")
        );
    }

    // 3. Modify and re-export
    println!("\n3. Re-importing and accepting remainder one instead:");
    let imported: Automaton<String, char> = codec::read_file(&div3_path)?;
    let remainder_one = imported.with_accepting(["q1".to_string()])?;

    let remainder_path = scratch("remainder_1_mod_3.json");
    codec::write_file(&remainder_path, &remainder_one)?;
    println!("   Written to {}\n", remainder_path.display());

    println!("   {:<8} {:<8} {:<10} {:<10}", "Binary", "Decimal", "Original", "Modified");
    println!("   {}", "-".repeat(36));
    for (binary, decimal) in BINARY_CASES {
        let original = if imported.accepts(binary.chars())? { "✓" } else { "✗" };
        let modified = if remainder_one.accepts(binary.chars())? { "✓" } else { "✗" };
        println!("   {binary:<8} {decimal:<8} {original:<10} {modified:<10}");
    }

    cleanup(&[&div3_path, &even_a_path, &remainder_path]);

    println!("\n=== Example Complete ===");
    Ok(())
}
