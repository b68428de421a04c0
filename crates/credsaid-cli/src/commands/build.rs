//! Build command implementation.

use credsaid_schema::{build_schema, SchemaRequest};
use std::path::Path;

use super::read_input;
use crate::output::format_json;

pub fn run(
    input: Option<String>,
    schema_only: bool,
    out_dir: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let request: SchemaRequest =
        serde_json::from_str(&text).map_err(|e| format!("Invalid schema request: {}", e))?;

    let response = build_schema(&request)
        .map_err(|e| format!("Failed to build schema ({:?}): {}", e.kind(), e))?;

    if let Some(dir) = out_dir {
        let path = Path::new(&dir).join(response.file_name());
        std::fs::write(&path, format_json(&response.schema))
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), "schema written");
    }

    if schema_only {
        println!("{}", format_json(&response.schema));
    } else {
        println!("{}", format_json(&serde_json::to_value(&response)?));
    }
    Ok(())
}
