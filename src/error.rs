//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during conversion operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Flavour not found in registry
    FlavourNotFound(String),
    /// Flavour does not support the requested direction
    NotSupported(String),
    /// A code or link placeholder could not be located at finish time.
    ///
    /// This indicates an internal inconsistency in the read pipeline, not bad
    /// input: tokenizing and paragraphizing degrade gracefully and never
    /// produce this.
    UnresolvedPlaceholder(String),
    /// The document violates the model contract (e.g. a character position
    /// with no resolvable format)
    MalformedDocument(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FlavourNotFound(name) => write!(f, "Flavour '{name}' not found"),
            ConvertError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            ConvertError::UnresolvedPlaceholder(marker) => {
                write!(f, "Unresolved placeholder: {marker}")
            }
            ConvertError::MalformedDocument(msg) => write!(f, "Malformed document: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
