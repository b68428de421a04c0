use credsaid_canonical::SaidError;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building or addressing a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Title or credential type is blank.
    #[error("{0} is required")]
    MissingRequiredMetadata(&'static str),
    /// Two attributes share a name, or one reuses a reserved field.
    #[error("attribute '{0}' is defined more than once")]
    DuplicateAttribute(String),
    /// The identifier label names a fixed template field.
    #[error("identifier label '{0}' collides with a schema template field")]
    ReservedLabel(String),
    /// A nested-document pointer does not resolve to an object.
    #[error("pointer '{0}' does not address a nested document")]
    InvalidPointer(String),
    /// Canonicalization, digest or encoding failure.
    #[error(transparent)]
    Said(#[from] SaidError),
}

/// Coarse classification handed to transports for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum ErrorKind {
    /// Caller input is missing required metadata.
    MissingRequiredMetadata,
    /// Caller input is structurally invalid.
    InvalidRequest,
    /// A document value cannot be canonicalized.
    UnserializableValue,
    /// The requested digest algorithm is not registered.
    UnsupportedAlgorithm,
    /// The hash primitive failed.
    DigestComputationFailed,
}

impl SchemaError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRequiredMetadata(_) => ErrorKind::MissingRequiredMetadata,
            Self::DuplicateAttribute(_) | Self::ReservedLabel(_) | Self::InvalidPointer(_) => {
                ErrorKind::InvalidRequest
            }
            Self::Said(err) => match err {
                SaidError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
                SaidError::UnserializableValue { .. } => ErrorKind::UnserializableValue,
                SaidError::DigestComputationFailed(_) => ErrorKind::DigestComputationFailed,
                SaidError::MissingIdentifierField(_)
                | SaidError::NotADocument
                | SaidError::MalformedIdentifier { .. } => ErrorKind::InvalidRequest,
            },
        }
    }
}
