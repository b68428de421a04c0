//! Canonical serialization and self-addressing identifier primitives.
//!
//! A document is serialized to compact JSON in insertion order, hashed with
//! an algorithm from the digest registry, and the digest is encoded as a
//! fixed-width CESR identifier. Every byte that participates in hashing is
//! produced by this crate.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing.
pub mod canonicalizer;
/// Digest algorithm registry.
pub mod digest;
/// Error types for canonical primitives.
pub mod errors;
/// Identifier encoding and parsing.
pub mod said;

pub use canonicalizer::Canonicalizer;
pub use digest::{lookup, Algorithm, BLAKE3_256, DEFAULT_CODE, REGISTRY};
pub use errors::SaidError;
pub use said::Said;
