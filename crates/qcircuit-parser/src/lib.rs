//! # qcircuit Parser
//!
//! Reads circuit source text into a validated [`Grid`]. A circuit file has one
//! line per qubit (top to bottom) and one character per time step (left to
//! right).
//!
//! ## Usage
//!
//! ```
//! # use qcircuit_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "HNI\nIOZ\n";
//!
//!     let grid = parse(source)?;
//!     assert_eq!(grid.row_count(), 2);
//!     assert_eq!(grid.column_count(), 3);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lines;
mod span;
mod validate;

pub use span::Span;

use log::{debug, trace};

use qcircuit_core::grid::Grid;

use error::ParseError;

/// Parse source text into a grid.
///
/// 1. **Split** - Break the source into lines, strip terminators, drop blank lines
/// 2. **Validate** - Check the lines form a non-empty rectangle and build the grid
///
/// Unrecognized characters are kept as [`qcircuit_core::grid::Symbol::Unknown`];
/// they are never an error.
///
/// # Errors
///
/// Returns a [`ParseError`] with code [`error::ErrorCode::E100`] when no
/// non-blank line remains, or [`error::ErrorCode::E101`] when line lengths
/// differ.
pub fn parse(source: &str) -> Result<Grid, ParseError> {
    let lines = lines::qubit_lines(source)?;
    trace!(lines = lines.len(); "Split source into qubit lines");

    let grid = validate::build_grid(&lines)?;
    debug!(rows = grid.row_count(), columns = grid.column_count(); "Grid validated");

    Ok(grid)
}
