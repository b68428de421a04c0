use std::collections::HashSet;

use credsaid_canonical::Said;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::AttributeSpec;
use crate::errors::SchemaError;

/// Attribute names the attributes block always defines.
pub const RESERVED_ATTRIBUTES: [&str; 2] = ["i", "dt"];

/// Schema metadata supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRequest {
    /// Schema title.
    pub title: String,
    /// Schema description.
    #[serde(default)]
    pub description: String,
    /// Credential type name.
    pub credential_type: String,
    /// Schema version.
    #[serde(default)]
    pub version: String,
    /// Credential attributes in declaration order.
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

impl SchemaRequest {
    /// Checks the request before any document is built.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.title.trim().is_empty() {
            return Err(SchemaError::MissingRequiredMetadata("title"));
        }
        if self.credential_type.trim().is_empty() {
            return Err(SchemaError::MissingRequiredMetadata("credentialType"));
        }
        let mut seen: HashSet<&str> = RESERVED_ATTRIBUTES.into_iter().collect();
        for attr in self.attributes.iter().filter(|attr| !attr.is_blank()) {
            if !seen.insert(attr.name.as_str()) {
                return Err(SchemaError::DuplicateAttribute(attr.name.clone()));
            }
        }
        Ok(())
    }

    /// Attributes that contribute to the schema.
    pub fn named_attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|attr| !attr.is_blank())
    }
}

/// A fully self-addressed schema and its identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    /// Schema document with its identifier embedded.
    pub schema: Value,
    /// Identifier of the schema.
    pub said: Said,
    /// Identifier of the embedded attributes block.
    pub attributes_said: Said,
}

impl SchemaResponse {
    /// Suggested file name for the persisted schema.
    pub fn file_name(&self) -> String {
        let stem = self
            .schema
            .get("credentialType")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or("schema");
        let prefix: String = self.said.as_str().chars().take(8).collect();
        format!("{}_{prefix}.json", stem.replace(['/', '\\'], "_"))
    }
}
