use thiserror::Error;

/// Errors raised while serializing, digesting or encoding a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaidError {
    /// No registry entry exists for the requested algorithm code.
    #[error("unsupported digest algorithm code '{0}'")]
    UnsupportedAlgorithm(String),
    /// A document field holds a value the canonical form cannot represent.
    #[error("unserializable value at {path}: {reason}")]
    UnserializableValue {
        /// Dotted path of the offending field (`root` for the document itself).
        path: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The hash primitive failed or produced output of the wrong size.
    #[error("digest computation failed: {0}")]
    DigestComputationFailed(String),
    /// The document has no field with the identifier label.
    #[error("identifier field '{0}' is missing from the document")]
    MissingIdentifierField(String),
    /// Self-addressing needs a JSON object at the top level.
    #[error("document must be a JSON object")]
    NotADocument,
    /// Text that was expected to hold an identifier does not parse as one.
    #[error("malformed identifier '{value}': {reason}")]
    MalformedIdentifier {
        /// Offending text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
