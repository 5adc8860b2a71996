//! Error codes for the qcircuit diagnostic system.
//!
//! - `E1xx` - Grid shape errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Empty input.
    ///
    /// The circuit file has no non-blank line, so there is no qubit to draw.
    E100,

    /// Irregular grid.
    ///
    /// Qubit lines have different lengths. Every line must have one symbol
    /// per time step.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
