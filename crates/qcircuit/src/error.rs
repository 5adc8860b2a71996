//! Error types for qcircuit operations.
//!
//! This module provides the main error type [`QcircuitError`] which wraps
//! the error conditions that can occur while turning a circuit file into a
//! picture.

use std::io;

use thiserror::Error;

use qcircuit_parser::error::{ErrorCode, ParseError};

/// The main error type for qcircuit operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source code
/// spans, kept together with the source so it can be rendered later.
#[derive(Debug, Error)]
pub enum QcircuitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl QcircuitError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Returns true if the input had no qubit line.
    pub fn is_empty_input(&self) -> bool {
        self.parse_code() == Some(ErrorCode::E100)
    }

    /// Returns true if the input lines had different lengths.
    pub fn is_irregular_grid(&self) -> bool {
        self.parse_code() == Some(ErrorCode::E101)
    }

    fn parse_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Parse { err, .. } => err.code(),
            _ => None,
        }
    }
}
