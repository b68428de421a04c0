use credsaid_canonical::{lookup, Algorithm, SaidError, DEFAULT_CODE};
use serde::{Deserialize, Serialize};

/// Label of the identifier field in JSON Schema documents.
pub const DEFAULT_LABEL: &str = "$id";

/// Per-invocation settings for self-addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaidConfig {
    /// Digest algorithm code, resolved through the registry.
    pub code: String,
    /// Name of the field that holds the identifier.
    pub label: String,
}

impl Default for SaidConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl SaidConfig {
    /// Resolves the configured code.
    pub fn algorithm(&self) -> Result<&'static Algorithm, SaidError> {
        lookup(&self.code)
    }
}
