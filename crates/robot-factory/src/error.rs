//! # Factory Errors
//!
//! This module defines the common error types used throughout the robot
//! factory. By centralizing error definitions, we ensure consistent error
//! handling across the registry and its callers.

/// Errors that can occur within the registry and its dispatch surface.
///
/// All of these are unrecoverable where they occur: nothing in this crate
/// catches or retries, each error propagates to the top level.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FactoryError {
    /// A prototype with the same key already exists in the registry.
    /// The stored prototype remains the first one registered.
    #[error("Robot [{0}] already exists in the registry")]
    DuplicateKey(String),

    /// Creation was requested for a key no prototype was registered under.
    #[error("Robot [{0}] not present in the registry")]
    UnknownKey(String),

    /// Creation count must be a positive integer.
    #[error("Creation count must be positive, got {0}")]
    InvalidCount(i64),

    /// A dispatched call did not match the `create<Key>(n)` shape.
    #[error("Bad method [{0}] or bad argument")]
    InvalidMethod(String),
}
