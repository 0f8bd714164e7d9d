//! Shared domain types
//!
//! The error type is deliberately small: every read-side computation in
//! this domain is total, so errors only come from catalog construction
//! and from the storage internals underneath the absorbing adapter.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Whether the caller can reasonably retry or fall back
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::Storage(_) | DomainError::Serialization(_))
    }
}
