//! Core error types for the formcraft workspace.
//!
//! [`FormcraftError`] covers every failure category the system distinguishes:
//! malformed input, unknown record ids, per-field validation failures,
//! storage faults, and transport faults. Each variant maps to an HTTP status
//! code via [`FormcraftError::status_code`].

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Per-field validation failures, keyed by field id.
///
/// Each field carries at most one message: rules are checked in a fixed
/// order and the first failing rule wins. An empty map means the form is
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Error messages keyed by the offending field's id.
    pub fields: HashMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for one field. A later message for the same field
    /// is ignored so that the first failing rule stays authoritative.
    pub fn record(&mut self, field_id: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field_id.into()).or_insert_with(|| message.into());
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The message recorded for a field, if any.
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.fields.get(field_id).map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// The primary error type for formcraft.
///
/// Gateway-facing code is expected to degrade any rejected or failed call
/// into one of these variants rather than propagating a panic; the reducer
/// and validation engine never produce errors at all.
#[derive(Error, Debug)]
pub enum FormcraftError {
    /// The caller supplied a malformed payload.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No record exists for the given id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// One or more fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The record store could not complete an operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A payload could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The persistence gateway could not be reached or answered abnormally.
    #[error("Transport error: {0}")]
    Transport(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FormcraftError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `BadRequest`, `Validation` -> 400
    /// - `NotFound` -> 404
    /// - `Transport` -> 502
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Transport(_) => 502,
            Self::Storage(_)
            | Self::Serialization(_)
            | Self::Io(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns `true` for the distinguished "unknown id" outcome, which
    /// callers surface differently from generic failures.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for FormcraftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormcraftError>`.
pub type FormcraftResult<T> = Result<T, FormcraftError>;
