use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON type of a credential attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// JSON string.
    #[default]
    String,
    /// JSON number.
    Number,
    /// JSON boolean.
    Boolean,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl AttributeType {
    /// Name used in the JSON Schema `type` keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One caller-defined attribute of the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Property name; rows with a blank name are skipped.
    pub name: String,
    /// JSON type of the value.
    #[serde(rename = "type", default)]
    pub kind: AttributeType,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether the attribute is listed under `required`.
    #[serde(default)]
    pub required: bool,
}

impl AttributeSpec {
    /// Creates an attribute.
    pub fn new(
        name: impl Into<String>,
        kind: AttributeType,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required,
        }
    }

    /// Whether the row has been given a name yet.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Description emitted into the schema, defaulted from the name.
    pub fn effective_description(&self) -> String {
        if self.description.is_empty() {
            format!("{} attribute", self.name)
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_request_row() {
        let attr: AttributeSpec = serde_json::from_str(
            r#"{"name":"seat","type":"number","description":"","required":false}"#,
        )
        .unwrap();
        assert_eq!(attr.kind, AttributeType::Number);
        assert_eq!(attr.effective_description(), "seat attribute");
    }

    #[test]
    fn rejects_unknown_type() {
        let result: Result<AttributeSpec, _> =
            serde_json::from_str(r#"{"name":"x","type":"date","description":"","required":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn whitespace_name_is_blank() {
        assert!(AttributeSpec::new(" \t", AttributeType::String, "x", true).is_blank());
        assert!(!AttributeSpec::new("x", AttributeType::String, "", false).is_blank());
    }
}
