//! Error types for covermap operations.
//!
//! Errors fall into three behavioural groups:
//!
//! - **Fatal input errors** (`Validation`, `WriteCollision`, `Config`, `Coverage`):
//!   abort the current command with a single-line message and a nonzero exit.
//! - **Recoverable read errors** (`Read`): raised while scoring a single file and
//!   absorbed by the caller, which degrades that file to an unknown complexity.
//! - **Unexpected I/O** (`Io`): anything the filesystem throws that is not covered
//!   by the categories above.
//!
//! Command entry points return `anyhow::Result`; `CovermapError` converts into
//! `anyhow::Error` through `?`, and can be recovered with `downcast_ref`.
//!
//! # Example
//!
//! ```rust
//! use covermap::errors::{CovermapError, ErrorCode};
//!
//! let err = CovermapError::validation("Unsupported file extension: .vue");
//! assert_eq!(err.code(), ErrorCode::VALIDATION_INPUT);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
///
/// - E001-E009: I/O and filesystem errors
/// - E020-E029: Configuration errors
/// - E030-E039: Coverage data errors
/// - E050-E059: Validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file could not be read
    pub const IO_READ: ErrorCode = ErrorCode("E001");
    /// I/O error - output already exists
    pub const IO_WRITE_COLLISION: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Config error - invalid value or syntax
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Coverage error - summary could not be parsed
    pub const COVERAGE_PARSE: ErrorCode = ErrorCode("E030");

    /// Validation error - bad path, extension or project root
    pub const VALIDATION_INPUT: ErrorCode = ErrorCode("E050");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unified error type for covermap operations.
#[derive(Debug, Error)]
pub enum CovermapError {
    /// Bad input path, wrong extension, or not a recognizable project
    #[error("{message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },

    /// A source file could not be read
    #[error("Failed to read {}: {message}", path.display())]
    Read {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The output file already exists and overwriting was not requested
    #[error("Output file already exists: {} (use --force to overwrite)", path.display())]
    WriteCollision { path: PathBuf },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Coverage summary problems
    #[error("Invalid coverage summary {}: {message}", path.display())]
    Coverage { message: String, path: PathBuf },

    /// Any other filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CovermapError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            path: None,
        }
    }

    /// Create a validation error with path context.
    pub fn validation_with_path(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Validation {
            message: format!("{}: {}", message.into(), path.as_ref().display()),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a read error from an underlying I/O failure.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            message: source.to_string(),
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a write-collision error.
    pub fn write_collision(path: impl Into<PathBuf>) -> Self {
        Self::WriteCollision { path: path.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a coverage parsing error.
    pub fn coverage(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Coverage {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Get the structured error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::VALIDATION_INPUT,
            Self::Read { .. } => ErrorCode::IO_READ,
            Self::WriteCollision { .. } => ErrorCode::IO_WRITE_COLLISION,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::Coverage { .. } => ErrorCode::COVERAGE_PARSE,
            Self::Io(_) => ErrorCode::IO_GENERIC,
        }
    }

    /// Whether the user can fix the problem by changing their input.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::WriteCollision { .. }
                | Self::Config { .. }
                | Self::Coverage { .. }
        )
    }

    /// Whether the error is absorbed locally instead of aborting the run.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Path the error refers to, when known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Validation { path, .. } | Self::Config { path, .. } => path.as_deref(),
            Self::Read { path, .. }
            | Self::WriteCollision { path }
            | Self::Coverage { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }
}

/// Result alias for covermap's typed errors.
pub type Result<T> = std::result::Result<T, CovermapError>;
