use serde_json::Value;

use crate::errors::SaidError;
use std::fmt;

/// Helper for building field paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Canonicalizer that emits deterministic bytes.
///
/// The canonical form is compact JSON with object members in insertion
/// order. Key order is part of the hashed input, so it is never sorted here:
/// verifiers re-serialize the document exactly as it was persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer;

impl Canonicalizer {
    /// Creates a canonicalizer.
    pub fn new() -> Self {
        Self
    }

    /// Produces canonical bytes for a JSON document.
    ///
    /// Every `Value` has a canonical form: without serde_json's
    /// `arbitrary_precision` feature a `Number` cannot hold NaN or an
    /// infinity, so the non-finite check below only matters if that feature
    /// is ever enabled. In practice this does not fail for a parsed or
    /// `json!`-built document.
    pub fn canonicalize(&self, value: &Value) -> Result<Vec<u8>, SaidError> {
        self.validate(value, Path::root())?;
        serde_json::to_vec(value).map_err(|err| SaidError::UnserializableValue {
            path: Path::root().to_string(),
            reason: err.to_string(),
        })
    }

    /// Walks the document and rejects values with no canonical representation.
    #[allow(clippy::only_used_in_recursion)]
    fn validate(&self, value: &Value, path: Path) -> Result<(), SaidError> {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.validate(child, path.push_field(key))?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    self.validate(item, path.push_index(idx))?;
                }
                Ok(())
            }
            Value::Number(num) => match num.as_f64() {
                Some(f) if !f.is_finite() => Err(SaidError::UnserializableValue {
                    path: path.to_string(),
                    reason: "non-finite number".to_string(),
                }),
                _ => Ok(()),
            },
            Value::String(_) | Value::Bool(_) | Value::Null => Ok(()),
        }
    }
}
