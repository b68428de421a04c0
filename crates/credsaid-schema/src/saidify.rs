//! Self-addressing of JSON documents.
//!
//! A document is addressed by writing a same-length placeholder into its
//! identifier field, hashing the canonical bytes, and substituting the
//! encoded digest back into the field. Nested documents are addressed
//! strictly bottom-up so that inner identifiers are inputs to the outer
//! computation, never outputs of it.

use credsaid_canonical::{Algorithm, Canonicalizer, Said, SaidError};
use serde::Serialize;
use serde_json::Value;

use crate::errors::SchemaError;

/// Outcome of checking a document against its embedded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    /// The embedded identifier matches the recomputed one.
    Valid {
        /// Verified identifier.
        said: Said,
    },
    /// The document changed after it was addressed.
    Mismatch {
        /// Identifier found in the document.
        claimed: Said,
        /// Identifier recomputed from the document.
        computed: Said,
    },
}

impl Verification {
    /// Whether the identifier checked out.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Computes the identifier of `document` and returns an addressed copy.
///
/// The identifier field must already exist so the template fixes its
/// position. The input document is left untouched.
pub fn self_address(
    document: &Value,
    label: &str,
    alg: &Algorithm,
) -> Result<(Value, Said), SaidError> {
    let mut working = document.clone();
    let said = compute(&mut working, label, alg)?;
    if let Value::Object(map) = &mut working {
        map.insert(label.to_string(), Value::String(said.to_string()));
    }
    tracing::debug!(label, code = alg.code, said = %said, "document self-addressed");
    Ok((working, said))
}

/// Addresses the sub-documents at `pointers` deepest-first, then the root.
///
/// Returns the identifiers in processing order; the root identifier is last.
/// An empty pointer names the root and is implied.
pub fn self_address_nested(
    document: &Value,
    label: &str,
    pointers: &[&str],
    alg: &Algorithm,
) -> Result<(Value, Vec<Said>), SchemaError> {
    let mut ordered: Vec<&str> = pointers.iter().copied().filter(|p| !p.is_empty()).collect();
    ordered.sort_by_key(|pointer| std::cmp::Reverse(depth(pointer)));

    let mut working = document.clone();
    let mut saids = Vec::with_capacity(ordered.len() + 1);
    for pointer in ordered {
        let slot = working
            .pointer_mut(pointer)
            .filter(|value| value.is_object())
            .ok_or_else(|| SchemaError::InvalidPointer(pointer.to_string()))?;
        let (addressed, said) = self_address(slot, label, alg)?;
        *slot = addressed;
        saids.push(said);
    }

    let (addressed, said) = self_address(&working, label, alg)?;
    saids.push(said);
    Ok((addressed, saids))
}

/// Recomputes the identifier of an addressed document and compares it.
///
/// The algorithm is taken from the embedded identifier's code.
pub fn verify(document: &Value, label: &str) -> Result<Verification, SaidError> {
    let claimed = match document {
        Value::Object(map) => match map.get(label) {
            Some(Value::String(text)) => Said::parse(text.as_str())?,
            Some(other) => {
                return Err(SaidError::MalformedIdentifier {
                    value: other.to_string(),
                    reason: "identifier field is not a string".to_string(),
                })
            }
            None => return Err(SaidError::MissingIdentifierField(label.to_string())),
        },
        _ => return Err(SaidError::NotADocument),
    };
    let alg = claimed.algorithm()?;
    let mut working = document.clone();
    let computed = compute(&mut working, label, alg)?;
    if computed == claimed {
        Ok(Verification::Valid { said: claimed })
    } else {
        tracing::debug!(label, claimed = %claimed, computed = %computed, "identifier mismatch");
        Ok(Verification::Mismatch { claimed, computed })
    }
}

/// Writes the placeholder into `document` and returns the identifier of the result.
fn compute(document: &mut Value, label: &str, alg: &Algorithm) -> Result<Said, SaidError> {
    let map = document.as_object_mut().ok_or(SaidError::NotADocument)?;
    let field = map
        .get_mut(label)
        .ok_or_else(|| SaidError::MissingIdentifierField(label.to_string()))?;
    *field = Value::String(alg.placeholder());

    let bytes = Canonicalizer::new().canonicalize(document)?;
    tracing::trace!(label, len = bytes.len(), "canonical bytes digested");
    let raw = alg.digest(&bytes)?;
    let said = Said::encode(alg, &raw)?;
    debug_assert_eq!(said.as_str().len(), alg.placeholder().len());
    Ok(said)
}

fn depth(pointer: &str) -> usize {
    pointer.matches('/').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use credsaid_canonical::BLAKE3_256;
    use serde_json::json;

    #[test]
    fn addresses_flat_document() {
        let document = json!({"d": "", "name": "alpha", "n": "1"});
        let (addressed, said) = self_address(&document, "d", &BLAKE3_256).unwrap();
        assert_eq!(said.as_str(), "EB5x_uer9qofgt4QJ750dxBJDCL6oIAtW9QiRXvzdRlv");
        assert_eq!(addressed["d"], said.as_str());
        // Input is a working copy only.
        assert_eq!(document["d"], "");
    }

    #[test]
    fn initial_field_value_does_not_matter() {
        let blank = json!({"d": "", "name": "alpha", "n": "1"});
        let stale = json!({"d": "Estale", "name": "alpha", "n": "1"});
        let (_, first) = self_address(&blank, "d", &BLAKE3_256).unwrap();
        let (_, second) = self_address(&stale, "d", &BLAKE3_256).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identifier_field_keeps_its_position() {
        let document = json!({"a": "1", "d": "", "z": "2"});
        let (addressed, _) = self_address(&document, "d", &BLAKE3_256).unwrap();
        let keys: Vec<&String> = addressed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "d", "z"]);
    }

    #[test]
    fn missing_label_is_rejected() {
        let document = json!({"name": "alpha"});
        assert_eq!(
            self_address(&document, "d", &BLAKE3_256).unwrap_err(),
            SaidError::MissingIdentifierField("d".to_string())
        );
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            self_address(&json!(["d"]), "d", &BLAKE3_256).unwrap_err(),
            SaidError::NotADocument
        );
    }

    #[test]
    fn nested_addresses_inner_before_outer() {
        let document = json!({
            "d": "",
            "child": {"d": "", "leaf": {"d": "", "v": "x"}}
        });
        let (addressed, saids) =
            self_address_nested(&document, "d", &["", "/child", "/child/leaf"], &BLAKE3_256)
                .unwrap();
        assert_eq!(saids.len(), 3);

        let (leaf, leaf_said) =
            self_address(&json!({"d": "", "v": "x"}), "d", &BLAKE3_256).unwrap();
        assert_eq!(saids[0], leaf_said);
        assert_eq!(addressed["child"]["leaf"], leaf);
        assert_eq!(addressed["child"]["d"], saids[1].as_str());
        assert_eq!(addressed["d"], saids[2].as_str());

        for pointer in ["", "/child", "/child/leaf"] {
            let node = addressed.pointer(pointer).unwrap();
            assert!(verify(node, "d").unwrap().is_valid(), "{pointer}");
        }
    }

    #[test]
    fn nested_rejects_dangling_pointer() {
        let document = json!({"d": "", "child": "scalar"});
        assert_eq!(
            self_address_nested(&document, "d", &["/child"], &BLAKE3_256).unwrap_err(),
            SchemaError::InvalidPointer("/child".to_string())
        );
        assert_eq!(
            self_address_nested(&document, "d", &["/missing"], &BLAKE3_256).unwrap_err(),
            SchemaError::InvalidPointer("/missing".to_string())
        );
    }

    #[test]
    fn verify_detects_tampering() {
        let (mut addressed, said) =
            self_address(&json!({"d": "", "name": "alpha"}), "d", &BLAKE3_256).unwrap();
        assert_eq!(verify(&addressed, "d").unwrap(), Verification::Valid { said: said.clone() });

        addressed["name"] = json!("beta");
        match verify(&addressed, "d").unwrap() {
            Verification::Mismatch { claimed, computed } => {
                assert_eq!(claimed, said);
                assert_ne!(computed, said);
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_placeholder() {
        let document = json!({"d": BLAKE3_256.placeholder(), "name": "alpha"});
        assert!(matches!(
            verify(&document, "d"),
            Err(SaidError::MalformedIdentifier { .. })
        ));
    }
}
