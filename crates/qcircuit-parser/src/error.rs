//! Error and diagnostic system for the qcircuit grid reader.
//!
//! The error system is built around the [`Diagnostic`] type: a message with an
//! optional [`ErrorCode`], labelled source spans and help text. One or more
//! diagnostics are wrapped in a [`ParseError`] returned from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use qcircuit_parser::error::{Diagnostic, ErrorCode};
//! # use qcircuit_parser::Span;
//!
//! let diag = Diagnostic::error("qubit lines must all be the same length")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(3..4), "1 symbol, expected 2")
//!     .with_secondary_label(Span::new(0..2), "first qubit line has 2 symbols")
//!     .with_help("pad with `I` (identity) if necessary");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
