//! Self-addressing identifiers in CESR qualified base64 form.
//!
//! An identifier is the algorithm code followed by the base64url encoding of
//! the lead-padded raw digest, with the padding characters dropped. The
//! result has a fixed width per algorithm, which is what lets a same-length
//! placeholder stand in for it during hashing.

use std::fmt;
use std::sync::LazyLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::digest::{Algorithm, REGISTRY};
use crate::errors::SaidError;

static QB64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid qb64 pattern"));

/// A self-addressing identifier.
///
/// Deserialization goes through [`Said::parse`], so a decoded value always
/// has a registered code and the registered width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Said(String);

impl Said {
    /// Encodes a raw digest produced by `alg`.
    pub fn encode(alg: &Algorithm, raw: &[u8]) -> Result<Self, SaidError> {
        if raw.len() != alg.raw_size {
            return Err(SaidError::DigestComputationFailed(format!(
                "cannot encode {} bytes as {}",
                raw.len(),
                alg
            )));
        }
        let ps = alg.pad_size();
        let mut padded = vec![0u8; ps];
        padded.extend_from_slice(raw);
        let text = URL_SAFE_NO_PAD.encode(&padded);
        let said = format!("{}{}", alg.code, &text[ps..]);
        if said.len() != alg.full_size {
            return Err(SaidError::DigestComputationFailed(format!(
                "encoded identifier has {} characters, expected {}",
                said.len(),
                alg.full_size
            )));
        }
        Ok(Self(said))
    }

    /// Parses identifier text, resolving its algorithm through the registry.
    pub fn parse(value: impl Into<String>) -> Result<Self, SaidError> {
        let value = value.into();
        if !QB64.is_match(&value) {
            return Err(SaidError::MalformedIdentifier {
                value,
                reason: "not base64url text".to_string(),
            });
        }
        let alg = REGISTRY
            .iter()
            .find(|alg| value.starts_with(alg.code))
            .ok_or_else(|| SaidError::UnsupportedAlgorithm(value[..1].to_string()))?;
        if value.len() != alg.full_size {
            return Err(SaidError::MalformedIdentifier {
                reason: format!("{} identifiers are {} characters", alg.name, alg.full_size),
                value,
            });
        }
        Ok(Self(value))
    }

    /// Registry entry named by the leading code.
    pub fn algorithm(&self) -> Result<&'static Algorithm, SaidError> {
        REGISTRY
            .iter()
            .find(|alg| self.0.starts_with(alg.code))
            .ok_or_else(|| SaidError::UnsupportedAlgorithm(self.0.chars().take(1).collect()))
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Said {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Said {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Said {
    type Error = SaidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Said> for String {
    fn from(said: Said) -> Self {
        said.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::BLAKE3_256;

    #[test]
    fn encode_prefixes_code_and_keeps_width() {
        let said = Said::encode(&BLAKE3_256, &[0u8; 32]).unwrap();
        assert_eq!(said.as_str(), format!("E{}", "A".repeat(43)));
    }

    #[test]
    fn encode_rejects_short_digest() {
        assert!(matches!(
            Said::encode(&BLAKE3_256, &[1u8; 31]),
            Err(SaidError::DigestComputationFailed(_))
        ));
    }

    #[test]
    fn deserialize_validates_text() {
        let said = Said::encode(&BLAKE3_256, &[7u8; 32]).unwrap();
        let json = serde_json::to_string(&said).unwrap();
        assert_eq!(serde_json::from_str::<Said>(&json).unwrap(), said);

        let err = serde_json::from_str::<Said>("\"bogus\"").unwrap_err();
        assert!(err.to_string().contains("malformed"), "{err}");
        assert!(serde_json::from_str::<Said>(&format!("\"{}\"", "#".repeat(44))).is_err());
        assert!(serde_json::from_str::<Said>(&format!("\"I{}\"", "A".repeat(43))).is_err());
    }

    #[test]
    fn parse_rejects_wrong_length_and_alphabet() {
        assert!(matches!(
            Said::parse("EAAA"),
            Err(SaidError::MalformedIdentifier { .. })
        ));
        assert!(matches!(
            Said::parse("#".repeat(44)),
            Err(SaidError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_code() {
        let text = format!("I{}", "A".repeat(43));
        assert_eq!(
            Said::parse(text),
            Err(SaidError::UnsupportedAlgorithm("I".to_string()))
        );
    }
}
