//! Self-addressing assembly of verifiable-credential schemas.
//!
//! This crate provides:
//! - Self-addressing of JSON documents and bottom-up nesting
//! - Verification of embedded identifiers
//! - The credential schema templates (outer schema and attributes block)
//! - The single build operation exposed to transports
//!
//! Core invariants:
//! - A placeholder and the identifier that replaces it have the same length
//! - Nested identifiers are computed before the document that embeds them
//! - Field order fixed by a template is preserved through hashing
//! - Building is a pure function of the request; no state is shared between calls
//!
#![deny(missing_docs)]

/// Attribute definitions supplied by callers.
pub mod attributes;
/// Schema templates and the build pipeline.
pub mod builder;
/// Per-invocation algorithm and label settings.
pub mod config;
/// Error types for schema operations.
pub mod errors;
/// Request and response shapes of the build operation.
pub mod request;
/// Document self-addressing and verification.
pub mod saidify;

pub use attributes::{AttributeSpec, AttributeType};
pub use builder::{build_schema, build_schema_with};
pub use config::{SaidConfig, DEFAULT_LABEL};
pub use errors::{ErrorKind, SchemaError};
pub use request::{SchemaRequest, SchemaResponse};
pub use saidify::{self_address, self_address_nested, verify, Verification};
