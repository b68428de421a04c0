//! Credential schema templates and the build-and-address pipeline.

use credsaid_canonical::Algorithm;
use serde_json::{json, Map, Value};
use tracing::instrument;

use crate::config::SaidConfig;
use crate::errors::SchemaError;
use crate::request::{SchemaRequest, SchemaResponse};
use crate::saidify::self_address_nested;

/// JSON Schema dialect declared by every schema.
pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Location of the attributes block inside the schema template.
pub const ATTRIBUTES_BLOCK_POINTER: &str = "/properties/a/oneOf/1";

/// Fixed keys of the schema and attributes-block templates.
///
/// The identifier label must not collide with any of them, or the
/// identifier would overwrite a structural field.
pub const TEMPLATE_KEYS: [&str; 9] = [
    "$schema",
    "title",
    "description",
    "type",
    "credentialType",
    "version",
    "properties",
    "additionalProperties",
    "required",
];

const DEFAULT_TITLE: &str = "Untitled Credential";
const DEFAULT_VERSION: &str = "1.0.0";

/// Builds the attributes-block template with an empty identifier field.
pub fn attributes_block(request: &SchemaRequest, label: &str) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "i".to_string(),
        json!({"description": "Issuee AID", "type": "string"}),
    );
    properties.insert(
        "dt".to_string(),
        json!({"description": "Issuance date time", "type": "string", "format": "date-time"}),
    );
    let mut required = vec![json!("i"), json!("dt")];

    for attr in request.named_attributes() {
        properties.insert(
            attr.name.clone(),
            json!({"description": attr.effective_description(), "type": attr.kind.as_str()}),
        );
        if attr.required {
            required.push(Value::String(attr.name.clone()));
        }
    }

    let mut block = Map::new();
    block.insert(label.to_string(), json!(""));
    block.insert("description".to_string(), json!("Attributes block"));
    block.insert("type".to_string(), json!("object"));
    block.insert("properties".to_string(), Value::Object(properties));
    block.insert("additionalProperties".to_string(), json!(false));
    block.insert("required".to_string(), Value::Array(required));
    Value::Object(block)
}

/// Builds the outer schema template around an attributes block.
pub fn schema_template(request: &SchemaRequest, label: &str, block: Value) -> Value {
    let mut schema = Map::new();
    schema.insert(label.to_string(), json!(""));
    schema.insert("$schema".to_string(), json!(JSON_SCHEMA_DRAFT));
    schema.insert(
        "title".to_string(),
        json!(or_default(&request.title, DEFAULT_TITLE)),
    );
    schema.insert("description".to_string(), json!(request.description));
    schema.insert("type".to_string(), json!("object"));
    schema.insert("credentialType".to_string(), json!(request.credential_type));
    schema.insert(
        "version".to_string(),
        json!(or_default(&request.version, DEFAULT_VERSION)),
    );
    schema.insert(
        "properties".to_string(),
        json!({
            "v": {"description": "Version", "type": "string"},
            "d": {"description": "Credential SAID", "type": "string"},
            "u": {"description": "One time use nonce", "type": "string"},
            "i": {"description": "Issuee AID", "type": "string"},
            "ri": {"description": "Credential status registry", "type": "string"},
            "s": {"description": "Schema SAID", "type": "string"},
            "a": {
                "oneOf": [
                    {"description": "Attributes block SAID", "type": "string"},
                    block
                ]
            }
        }),
    );
    schema.insert("additionalProperties".to_string(), json!(false));
    schema.insert("required".to_string(), json!(["i", "ri", "s", "d"]));
    Value::Object(schema)
}

/// Validates the request, then builds and self-addresses the schema.
pub fn build_schema(request: &SchemaRequest) -> Result<SchemaResponse, SchemaError> {
    build_schema_with(request, &SaidConfig::default())
}

/// Like [`build_schema`], with an explicit algorithm and identifier label.
#[instrument(level = "debug", skip_all, fields(title = %request.title))]
pub fn build_schema_with(
    request: &SchemaRequest,
    config: &SaidConfig,
) -> Result<SchemaResponse, SchemaError> {
    request.validate()?;
    if TEMPLATE_KEYS.contains(&config.label.as_str()) {
        return Err(SchemaError::ReservedLabel(config.label.clone()));
    }
    let alg = config.algorithm()?;
    assemble(request, &config.label, alg)
}

fn assemble(
    request: &SchemaRequest,
    label: &str,
    alg: &Algorithm,
) -> Result<SchemaResponse, SchemaError> {
    let block = attributes_block(request, label);
    let template = schema_template(request, label, block);
    let (schema, saids) =
        self_address_nested(&template, label, &[ATTRIBUTES_BLOCK_POINTER], alg)?;

    let [attributes_said, said]: [_; 2] = saids
        .try_into()
        .map_err(|_| SchemaError::InvalidPointer(ATTRIBUTES_BLOCK_POINTER.to_string()))?;
    tracing::info!(said = %said, attributes_said = %attributes_said, "schema built");
    Ok(SchemaResponse {
        schema,
        said,
        attributes_said,
    })
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
