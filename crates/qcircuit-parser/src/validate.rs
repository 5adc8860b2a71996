//! Grid shape validation.
//!
//! Turns the qubit lines produced by [`crate::lines`] into a [`Grid`]. The
//! only checks are shape checks: at least one line, and every line with the
//! same number of symbols. Characters are never rejected.

use log::debug;

use qcircuit_core::grid::{Grid, Symbol};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Spanned,
};

const IRREGULAR_HELP: &str =
    "qubit lines must be the same length; pad with `I` (identity) if necessary";

fn symbol_count(count: usize) -> String {
    if count == 1 {
        "1 symbol".to_string()
    } else {
        format!("{count} symbols")
    }
}

fn empty_input() -> Diagnostic {
    Diagnostic::error("you need at least one qubit line")
        .with_code(ErrorCode::E100)
        .with_help("add one line of gate symbols per qubit")
}

/// Build the grid, reporting every line whose length differs from the first.
pub(crate) fn build_grid(lines: &[Spanned<&str>]) -> Result<Grid, ParseError> {
    let Some(first) = lines.first() else {
        return Err(empty_input().into());
    };

    let expected = first.inner().chars().count();
    let mismatched: Vec<_> = lines
        .iter()
        .map(|line| (line, line.inner().chars().count()))
        .filter(|(_, count)| *count != expected)
        .collect();

    if !mismatched.is_empty() {
        let diagnostic = mismatched.iter().fold(
            Diagnostic::error("qubit lines must all be the same length")
                .with_code(ErrorCode::E101)
                .with_secondary_label(
                    first.span(),
                    format!("first qubit line has {}", symbol_count(expected)),
                )
                .with_help(IRREGULAR_HELP),
            |diagnostic, (line, count)| {
                diagnostic.with_label(
                    line.span(),
                    format!("{}, expected {expected}", symbol_count(*count)),
                )
            },
        );
        return Err(diagnostic.into());
    }

    let rows: Vec<Vec<Symbol>> = lines
        .iter()
        .map(|line| line.inner().chars().map(Symbol::from).collect())
        .collect();

    let grid = Grid::from_rows(rows).map_err(|err| {
        Diagnostic::error(err.to_string()).with_code(ErrorCode::E101)
    })?;

    let unknown = grid.symbols().filter(|symbol| !symbol.is_known()).count();
    if unknown > 0 {
        debug!(unknown; "Grid contains symbols that draw nothing");
    }

    Ok(grid)
}
