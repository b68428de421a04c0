use std::fmt;

use crate::errors::SaidError;

/// Code of the default algorithm, Blake3-256.
pub const DEFAULT_CODE: &str = "E";

/// A registered digest algorithm.
///
/// Each entry fixes the `(code, raw digest size, encoded identifier size)`
/// triple, so placeholder sizing never depends on anything computed at
/// runtime. Adding an algorithm means adding a row to [`REGISTRY`].
#[derive(Clone, Copy)]
pub struct Algorithm {
    /// Selector prepended to the encoded digest.
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Size of the raw digest in bytes.
    pub raw_size: usize,
    /// Length of the encoded identifier in characters, code included.
    pub full_size: usize,
    hash: fn(&[u8]) -> Vec<u8>,
}

/// Blake3 with a 256-bit output.
pub const BLAKE3_256: Algorithm = Algorithm {
    code: "E",
    name: "Blake3_256",
    raw_size: 32,
    full_size: 44,
    hash: blake3_256,
};

/// Every algorithm this crate can address documents with.
pub static REGISTRY: &[Algorithm] = &[BLAKE3_256];

fn blake3_256(data: &[u8]) -> Vec<u8> {
    blake3::hash(data).as_bytes().to_vec()
}

/// Resolves an algorithm code through the registry.
pub fn lookup(code: &str) -> Result<&'static Algorithm, SaidError> {
    REGISTRY
        .iter()
        .find(|alg| alg.code == code)
        .ok_or_else(|| SaidError::UnsupportedAlgorithm(code.to_string()))
}

impl Algorithm {
    /// Hashes `bytes`, checking the output against the registered raw size.
    pub fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>, SaidError> {
        let raw = (self.hash)(bytes);
        if raw.len() != self.raw_size {
            return Err(SaidError::DigestComputationFailed(format!(
                "{} produced {} bytes, expected {}",
                self.name,
                raw.len(),
                self.raw_size
            )));
        }
        Ok(raw)
    }

    /// Number of zero bytes prepended before base64 encoding.
    pub fn pad_size(&self) -> usize {
        (3 - self.raw_size % 3) % 3
    }

    /// Same-length stand-in for the identifier while it is being computed.
    pub fn placeholder(&self) -> String {
        "#".repeat(self.full_size)
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Algorithm {}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("raw_size", &self.raw_size)
            .field("full_size", &self.full_size)
            .finish()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_sizes_are_consistent() {
        for alg in REGISTRY {
            // CESR: the code occupies exactly the characters freed by lead padding.
            assert_eq!(alg.code.len(), alg.pad_size(), "{alg}");
            let b64_len = (alg.raw_size + alg.pad_size()) / 3 * 4;
            assert_eq!(alg.full_size, b64_len, "{alg}");
        }
    }

    #[test]
    fn lookup_resolves_default_code() {
        let alg = lookup(DEFAULT_CODE).unwrap();
        assert_eq!(alg, &BLAKE3_256);
        assert_eq!(alg.placeholder().len(), 44);
    }

    #[test]
    fn lookup_rejects_unknown_code() {
        assert_eq!(
            lookup("I"),
            Err(SaidError::UnsupportedAlgorithm("I".to_string()))
        );
    }

    #[test]
    fn digest_rejects_wrong_output_size() {
        let broken = Algorithm {
            hash: |_| vec![0u8; 16],
            ..BLAKE3_256
        };
        assert!(matches!(
            broken.digest(b"abc"),
            Err(SaidError::DigestComputationFailed(_))
        ));
    }
}
