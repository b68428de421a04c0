//! Saidify command implementation.

use credsaid_canonical::lookup;
use credsaid_schema::self_address_nested;

use super::read_json;
use crate::output::format_json;

pub fn run(
    input: Option<String>,
    label: String,
    code: String,
    pointers: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_json(input)?;
    let alg = lookup(&code)?;

    let pointers: Vec<&str> = pointers.iter().map(String::as_str).collect();
    let (addressed, saids) = self_address_nested(&document, &label, &pointers, alg)
        .map_err(|e| format!("Failed to compute SAID: {}", e))?;

    if let Some(said) = saids.last() {
        tracing::info!(said = %said, nested = saids.len() - 1, "document addressed");
    }
    println!("{}", format_json(&addressed));
    Ok(())
}
