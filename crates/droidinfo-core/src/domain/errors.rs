//! Domain error types
//!
//! Only structural failures leave the snapshot path as errors. Missing or
//! permission-gated data is never an error at this level; it degrades to
//! JSON null instead.

use thiserror::Error;

/// Errors that can occur while composing or encoding a snapshot
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The composed snapshot could not be encoded as JSON
    #[error("Failed to serialize device snapshot: {0}")]
    Serialization(String),

    /// A display size string was not of the form `<width>x<height>`
    #[error("Invalid display size: {0}")]
    InvalidDisplaySize(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

/// Failure to read an internal attribute off a capability object
///
/// Capability adapters return this from `read_field`; the safe extractor
/// swallows every variant and reports JSON null instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldAccessError {
    /// The attribute does not exist on this platform version
    #[error("Field {0} does not exist on this capability object")]
    Missing(String),

    /// The attribute exists but cannot be read
    #[error("Field {0} is not accessible")]
    Inaccessible(String),

    /// The attribute holds a value of an unexpected type
    #[error("Field {field} has an unexpected type (expected {expected})")]
    WrongType {
        /// The attribute name
        field: String,
        /// The type the caller expected
        expected: String,
    },
}
