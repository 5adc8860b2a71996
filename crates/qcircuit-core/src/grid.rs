//! The circuit grid: one row per qubit, one column per time step.
//!
//! A [`Grid`] is built once from validated input and never mutated. Each cell
//! holds a [`Symbol`]. Characters outside the known alphabet are kept as
//! [`Symbol::Unknown`] rather than rejected.

use std::fmt;

use thiserror::Error;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `I` - identity gate, the wire passes through.
    Identity,
    /// `H` - Hadamard gate.
    Hadamard,
    /// `Z` - Pauli-Z gate.
    PauliZ,
    /// `X` - Pauli-X gate.
    PauliX,
    /// `B` - left blank because a CNOT drawn from another row covers it.
    Blank,
    /// `C` - CNOT control on the bottom, line drawn upward.
    CnotControlBottom,
    /// `F` - CNOT control on the top, line drawn downward.
    CnotControlTop,
    /// `L` - wire crossed by a line extending upward.
    CrossUp,
    /// `V` - wire crossed by a line extending downward.
    CrossDown,
    /// `U` - control connecting upward to a gate box.
    ControlUpToGate,
    /// `P` - control connecting upward to the row above.
    ControlUp,
    /// `D` - control connecting downward to a gate box.
    ControlDownToGate,
    /// `N` - control connecting downward to the row below.
    ControlDown,
    /// `O` - circled-plus target.
    Target,
    /// `S` - top endpoint of a swap.
    SwapTop,
    /// `W` - bottom endpoint of a swap, draws the connecting line.
    SwapBottom,
    /// Any other character. Draws nothing.
    Unknown(char),
}

impl Symbol {
    /// Every known symbol, in vocabulary order.
    pub const KNOWN: [Symbol; 16] = [
        Symbol::Identity,
        Symbol::Hadamard,
        Symbol::PauliZ,
        Symbol::PauliX,
        Symbol::Blank,
        Symbol::CnotControlBottom,
        Symbol::CnotControlTop,
        Symbol::CrossUp,
        Symbol::CrossDown,
        Symbol::ControlUpToGate,
        Symbol::ControlUp,
        Symbol::ControlDownToGate,
        Symbol::ControlDown,
        Symbol::Target,
        Symbol::SwapTop,
        Symbol::SwapBottom,
    ];

    /// Returns the character this symbol is written as.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Identity => 'I',
            Symbol::Hadamard => 'H',
            Symbol::PauliZ => 'Z',
            Symbol::PauliX => 'X',
            Symbol::Blank => 'B',
            Symbol::CnotControlBottom => 'C',
            Symbol::CnotControlTop => 'F',
            Symbol::CrossUp => 'L',
            Symbol::CrossDown => 'V',
            Symbol::ControlUpToGate => 'U',
            Symbol::ControlUp => 'P',
            Symbol::ControlDownToGate => 'D',
            Symbol::ControlDown => 'N',
            Symbol::Target => 'O',
            Symbol::SwapTop => 'S',
            Symbol::SwapBottom => 'W',
            Symbol::Unknown(c) => c,
        }
    }

    /// Returns a one-line description, used in help output.
    pub fn description(self) -> &'static str {
        match self {
            Symbol::Identity => "identity (wire passes through)",
            Symbol::Hadamard => "Hadamard gate",
            Symbol::PauliZ => "Pauli-Z gate",
            Symbol::PauliX => "Pauli-X gate",
            Symbol::Blank => "blank, the other end of a C/F CNOT covers it",
            Symbol::CnotControlBottom => "CNOT control on the bottom, line goes up",
            Symbol::CnotControlTop => "CNOT control on the top, line goes down",
            Symbol::CrossUp => "wire crossed by a line going up",
            Symbol::CrossDown => "wire crossed by a line going down",
            Symbol::ControlUpToGate => "control, line up to a gate box",
            Symbol::ControlUp => "control, line up to the row above",
            Symbol::ControlDownToGate => "control, line down to a gate box",
            Symbol::ControlDown => "control, line down to the row below",
            Symbol::Target => "CNOT/Toffoli target",
            Symbol::SwapTop => "swap, top endpoint",
            Symbol::SwapBottom => "swap, bottom endpoint with connecting line",
            Symbol::Unknown(_) => "unknown, draws nothing",
        }
    }

    /// Returns true unless this is [`Symbol::Unknown`].
    pub fn is_known(self) -> bool {
        !matches!(self, Symbol::Unknown(_))
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|symbol| symbol.as_char() == c)
            .unwrap_or(Symbol::Unknown(c))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rows handed to [`Grid::from_rows`] that do not form a rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridShapeError {
    #[error("a grid needs at least one row and one column")]
    Empty,

    #[error("row {row} has {found} symbols, expected {expected}")]
    Irregular {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// A rectangular, non-empty grid of symbols.
///
/// Rows are qubits (top to bottom), columns are time steps (left to right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
    column_count: usize,
}

impl Grid {
    /// Builds a grid from rows of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GridShapeError::Empty`] when there are no rows or the rows
    /// are empty, and [`GridShapeError::Irregular`] for the first row whose
    /// length differs from the first row's.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qcircuit_core::grid::{Grid, Symbol};
    /// let grid = Grid::from_rows(vec![
    ///     "NI".chars().map(Symbol::from).collect(),
    ///     "OH".chars().map(Symbol::from).collect(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.column_count(), 2);
    /// assert_eq!(grid.symbol(1, 0), Symbol::Target);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self, GridShapeError> {
        let column_count = rows.first().map_or(0, Vec::len);
        if column_count == 0 {
            return Err(GridShapeError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != column_count)
        {
            return Err(GridShapeError::Irregular {
                row,
                found,
                expected: column_count,
            });
        }

        Ok(Self { rows, column_count })
    }

    /// Number of qubit rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of time steps.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Returns the symbol at `(qubit, step)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn symbol(&self, qubit: usize, step: usize) -> Symbol {
        self.rows[qubit][step]
    }

    /// Iterates over every cell in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.iter().flatten().copied()
    }
}
