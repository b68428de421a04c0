//! Verify command implementation.

use credsaid_schema::{verify, Verification};
use serde_json::json;

use super::read_json;
use crate::output::{print_table_header, truncate};

pub fn run(
    input: Option<String>,
    label: String,
    pointers: Vec<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_json(input)?;

    let mut targets = vec![String::new()];
    targets.extend(pointers);

    let mut all_ok = true;
    let mut results = Vec::new();
    for pointer in targets {
        let node = document
            .pointer(&pointer)
            .ok_or_else(|| format!("Pointer {} does not resolve", pointer))?;
        let verification = verify(node, &label)
            .map_err(|e| format!("Cannot verify {}: {}", display_pointer(&pointer), e))?;
        all_ok = all_ok && verification.is_valid();
        results.push((pointer, verification));
    }

    if json_output {
        let json_results: Vec<_> = results
            .iter()
            .map(|(pointer, verification)| {
                json!({
                    "pointer": pointer,
                    "result": verification,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        print_table_header();
        for (pointer, verification) in &results {
            let (said, status) = match verification {
                Verification::Valid { said } => (said.to_string(), "valid".to_string()),
                Verification::Mismatch { claimed, computed } => (
                    claimed.to_string(),
                    format!("MISMATCH (computed {})", computed),
                ),
            };
            println!(
                "{:<24} {:<44} {}",
                truncate(display_pointer(pointer), 24),
                said,
                status
            );
        }
    }

    if strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() {
        "(root)"
    } else {
        pointer
    }
}
