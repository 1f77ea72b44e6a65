//! Generate REFERENCE.md from the formula registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-reference
//! cargo run --bin gen-reference -- docs/REFERENCE.md
//! ```
//!
//! Without an argument the file is written to `trig_core/src/equations/REFERENCE.md`.

use std::fs;
use std::path::PathBuf;

use trig_core::equations::generate_reference_markdown;

const DEFAULT_OUTPUT: &str = "trig_core/src/equations/REFERENCE.md";

fn main() {
    println!("Generating formula reference...");

    let markdown = generate_reference_markdown();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
