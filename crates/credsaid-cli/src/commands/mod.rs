//! Subcommand implementations.

pub mod build;
pub mod canonicalize;
pub mod saidify;
pub mod verify;

use serde_json::Value;
use std::io::{self, Read};

/// Reads input text from a file, or stdin if no path is given.
pub fn read_input(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    Ok(text)
}

/// Reads and parses a JSON document, keeping its member order.
pub fn read_json(input: Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let value: Value = serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value)
}
