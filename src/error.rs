//! Error types for nestcfg

use crate::value::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nestcfg operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Boxed error returned by assignment callbacks
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The single error returned to callers of [`ConfigParser`](crate::ConfigParser).
///
/// Every failure met while reading, decoding or flattening a document is
/// wrapped exactly once in a `ParseError`, so callers can tell configuration
/// parsing failures apart from their own errors. The underlying [`Error`] is
/// available through [`inner`](Self::inner) and [`std::error::Error::source`].
#[derive(Error, Debug)]
#[error("error parsing configuration: {inner}")]
pub struct ParseError {
    #[from]
    inner: Error,
}

impl ParseError {
    /// The cause of this parse failure
    #[must_use]
    pub fn inner(&self) -> &Error {
        &self.inner
    }

    /// Consume the wrapper and return the cause
    #[must_use]
    pub fn into_inner(self) -> Error {
        self.inner
    }

    /// See [`Error::is_not_found`]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.inner.is_not_found()
    }

    /// See [`Error::is_decode_error`]
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        self.inner.is_decode_error()
    }

    /// See [`Error::is_unsupported_type`]
    #[must_use]
    pub fn is_unsupported_type(&self) -> bool {
        self.inner.is_unsupported_type()
    }

    /// See [`Error::is_assignment_error`]
    #[must_use]
    pub fn is_assignment_error(&self) -> bool {
        self.inner.is_assignment_error()
    }
}

/// Cause of a [`ParseError`]
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("failed to read configuration input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("invalid {format} document: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    // -------------------------------------------------------------------------
    // Coercion Errors
    // -------------------------------------------------------------------------
    #[error("unsupported key under '{parent}': {source}")]
    UnsupportedKey {
        parent: String,
        #[source]
        source: ConversionError,
    },

    #[error("unsupported value for '{name}': {source}")]
    UnsupportedValue {
        name: String,
        #[source]
        source: ConversionError,
    },

    // -------------------------------------------------------------------------
    // Assignment Errors
    // -------------------------------------------------------------------------
    /// The assignment callback rejected a value. Displays as the callback's
    /// own error, which is also returned from `source()`, so reporters that
    /// print the whole chain (such as anyhow's `{:#}`) show the message twice.
    #[error("{source}")]
    Assignment {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Check if this is a missing config file
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Check if the document itself could not be decoded
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Check if a key or value had a kind that cannot be turned into a string
    #[must_use]
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedKey { .. } | Error::UnsupportedValue { .. }
        )
    }

    /// Check if the assignment callback rejected a value
    #[must_use]
    pub fn is_assignment_error(&self) -> bool {
        matches!(self, Error::Assignment { .. })
    }

    /// Flattened key the error occurred at, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Error::UnsupportedKey { parent, .. } => Some(parent),
            Error::UnsupportedValue { name, .. } | Error::Assignment { name, .. } => Some(name),
            _ => None,
        }
    }

    pub(crate) fn decode(format: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Decode {
            format,
            message: err.to_string(),
        }
    }
}

/// A value whose kind has no string form.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("couldn't convert {} ({}) to string", .value, .value.kind())]
pub struct ConversionError {
    value: Value,
}

impl ConversionError {
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    /// The offending value
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}
