//! Error types for the todo store.
//!
//! # Design
//! `InvalidId` is kept apart from `StoreError` because it is raised before
//! any store is consulted: a malformed identifier never reaches the database.
//! `NotFound` gets a dedicated variant so callers can map it to 404 without
//! inspecting messages. Everything else the driver reports is flattened into
//! `Backend` with its message preserved.

use std::time::Duration;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A client-supplied identifier that is not a well-formed store id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid todo id: {0:?}")]
pub struct InvalidId(pub String);

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record matched a well-formed identifier.
    #[error("todo not found")]
    NotFound,

    /// The store rejected or failed to execute a command, or returned a
    /// document that could not be decoded.
    #[error("{0}")]
    Backend(String),

    /// An operation did not complete within its configured deadline.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
