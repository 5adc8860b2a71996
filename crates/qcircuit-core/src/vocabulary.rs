//! Symbol vocabularies and the symbol-to-primitive dispatch table.
//!
//! Every symbol maps to an ordered list of [`Stamp`]s. A stamp names a
//! [`Primitive`] and a vertical offset from the cell's anchor point. Gates that
//! span several rows are never assembled by looking at neighbouring cells:
//! each row's symbol carries the offset that makes its line meet the row next
//! to it.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::trace;
use serde::Deserialize;

use crate::{
    geometry::Point,
    grid::Symbol,
    primitive::{Placement, Primitive},
};

/// Vertical distance between two qubit rows, in picture units.
pub const ROW_PITCH: f64 = 2.25;

/// Room a `D` control leaves above the gate box on the row below.
const GATE_ROOM: f64 = 0.75;

/// Which symbol set is accepted.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Extended` - every symbol, including crossings, multi-control lines and swaps (default)
/// - `Minimal` - only `I H Z X B C F`; anything else draws nothing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    Minimal,
    #[default]
    Extended,
}

impl FromStr for Vocabulary {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            _ => Err("Unsupported vocabulary"),
        }
    }
}

impl From<Vocabulary> for &'static str {
    fn from(val: Vocabulary) -> Self {
        match val {
            Vocabulary::Minimal => "minimal",
            Vocabulary::Extended => "extended",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// One primitive drawn for a cell, shifted vertically from the cell anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    primitive: Primitive,
    dy: f64,
}

impl Stamp {
    /// A stamp drawn exactly at the cell anchor.
    pub fn at_anchor(primitive: Primitive) -> Self {
        Self { primitive, dy: 0.0 }
    }

    /// A stamp drawn `dy` units above (positive) or below (negative) the anchor.
    pub fn shifted(primitive: Primitive, dy: f64) -> Self {
        Self { primitive, dy }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Places this stamp relative to `anchor`.
    pub fn place(&self, anchor: Point) -> Placement {
        Placement::new(self.primitive, anchor.add_point(Point::new(0.0, self.dy)))
    }
}

/// Ordered dispatch table from [`Symbol`] to the [`Stamp`]s it draws.
///
/// Symbols absent from the table draw nothing.
///
/// # Examples
///
/// ```
/// # use qcircuit_core::{grid::Symbol, primitive::Primitive, vocabulary::{SymbolTable, Vocabulary}};
/// let table = SymbolTable::new(Vocabulary::Extended);
///
/// let stamps = table.stamps(Symbol::ControlDown);
/// assert_eq!(stamps.len(), 2);
/// assert_eq!(stamps[0].primitive(), Primitive::ControlDot);
/// assert_eq!(stamps[1].dy(), -2.25);
///
/// assert!(table.stamps(Symbol::Unknown('?')).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    vocabulary: Vocabulary,
    entries: IndexMap<Symbol, Vec<Stamp>>,
}

impl SymbolTable {
    /// Builds the table for `vocabulary`.
    pub fn new(vocabulary: Vocabulary) -> Self {
        let mut entries = IndexMap::new();

        entries.insert(Symbol::Identity, vec![Stamp::at_anchor(Primitive::ThroughWire)]);
        entries.insert(Symbol::Hadamard, vec![Stamp::at_anchor(Primitive::Hadamard)]);
        entries.insert(Symbol::PauliZ, vec![Stamp::at_anchor(Primitive::PauliZ)]);
        entries.insert(Symbol::PauliX, vec![Stamp::at_anchor(Primitive::PauliX)]);
        entries.insert(Symbol::Blank, vec![]);
        entries.insert(
            Symbol::CnotControlBottom,
            vec![Stamp::at_anchor(Primitive::CnotControlBottom)],
        );
        entries.insert(
            Symbol::CnotControlTop,
            vec![Stamp::at_anchor(Primitive::CnotControlTop)],
        );

        if vocabulary == Vocabulary::Extended {
            entries.insert(
                Symbol::CrossUp,
                vec![
                    Stamp::at_anchor(Primitive::ThroughWire),
                    Stamp::at_anchor(Primitive::LineUpTouching),
                ],
            );
            entries.insert(
                Symbol::CrossDown,
                vec![
                    Stamp::at_anchor(Primitive::ThroughWire),
                    Stamp::shifted(Primitive::LineUpTouching, -ROW_PITCH),
                ],
            );
            entries.insert(
                Symbol::ControlUpToGate,
                vec![
                    Stamp::at_anchor(Primitive::ControlDot),
                    Stamp::at_anchor(Primitive::LineUpRoom),
                ],
            );
            entries.insert(
                Symbol::ControlUp,
                vec![
                    Stamp::at_anchor(Primitive::ControlDot),
                    Stamp::at_anchor(Primitive::LineUpTouching),
                ],
            );
            entries.insert(
                Symbol::ControlDownToGate,
                vec![
                    Stamp::at_anchor(Primitive::ControlDot),
                    Stamp::shifted(Primitive::LineUpRoom, -ROW_PITCH + GATE_ROOM),
                ],
            );
            entries.insert(
                Symbol::ControlDown,
                vec![
                    Stamp::at_anchor(Primitive::ControlDot),
                    Stamp::shifted(Primitive::LineUpTouching, -ROW_PITCH),
                ],
            );
            entries.insert(
                Symbol::Target,
                vec![
                    Stamp::at_anchor(Primitive::Xor),
                    Stamp::at_anchor(Primitive::XorFixer),
                ],
            );
            entries.insert(Symbol::SwapTop, vec![Stamp::at_anchor(Primitive::Swap)]);
            entries.insert(
                Symbol::SwapBottom,
                vec![
                    Stamp::at_anchor(Primitive::Swap),
                    Stamp::at_anchor(Primitive::LineUpTouching),
                ],
            );
        }

        trace!(vocabulary:?, symbols = entries.len(); "Built symbol table");

        Self {
            vocabulary,
            entries,
        }
    }

    /// The vocabulary this table was built for.
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Returns the stamps for `symbol`, empty when the symbol is not in the table.
    pub fn stamps(&self, symbol: Symbol) -> &[Stamp] {
        self.entries.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `symbol` belongs to this table's vocabulary.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// Iterates over the recognised symbols in vocabulary order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn primitives(table: &SymbolTable, symbol: char) -> Vec<Primitive> {
        table
            .stamps(Symbol::from(symbol))
            .iter()
            .map(Stamp::primitive)
            .collect()
    }

    fn offsets(table: &SymbolTable, symbol: char) -> Vec<f64> {
        table
            .stamps(Symbol::from(symbol))
            .iter()
            .map(Stamp::dy)
            .collect()
    }

    #[test]
    fn test_vocabulary_from_str_and_display() {
        assert_eq!("minimal".parse::<Vocabulary>(), Ok(Vocabulary::Minimal));
        assert_eq!("extended".parse::<Vocabulary>(), Ok(Vocabulary::Extended));
        assert!("full".parse::<Vocabulary>().is_err());
        assert_eq!(Vocabulary::Minimal.to_string(), "minimal");
        assert_eq!(Vocabulary::default(), Vocabulary::Extended);
    }

    #[test]
    fn test_single_box_gates() {
        let table = SymbolTable::default();

        assert_eq!(primitives(&table, 'I'), vec![Primitive::ThroughWire]);
        assert_eq!(primitives(&table, 'H'), vec![Primitive::Hadamard]);
        assert_eq!(primitives(&table, 'Z'), vec![Primitive::PauliZ]);
        assert_eq!(primitives(&table, 'X'), vec![Primitive::PauliX]);
        assert_eq!(primitives(&table, 'C'), vec![Primitive::CnotControlBottom]);
        assert_eq!(primitives(&table, 'F'), vec![Primitive::CnotControlTop]);
        assert_eq!(primitives(&table, 'S'), vec![Primitive::Swap]);
    }

    #[test]
    fn test_blank_is_known_but_empty() {
        let table = SymbolTable::default();
        assert!(table.contains(Symbol::Blank));
        assert!(table.stamps(Symbol::Blank).is_empty());
    }

    #[test]
    fn test_two_stamp_symbols_keep_order() {
        let table = SymbolTable::default();

        assert_eq!(
            primitives(&table, 'L'),
            vec![Primitive::ThroughWire, Primitive::LineUpTouching]
        );
        assert_eq!(
            primitives(&table, 'U'),
            vec![Primitive::ControlDot, Primitive::LineUpRoom]
        );
        assert_eq!(
            primitives(&table, 'O'),
            vec![Primitive::Xor, Primitive::XorFixer]
        );
        assert_eq!(
            primitives(&table, 'W'),
            vec![Primitive::Swap, Primitive::LineUpTouching]
        );
    }

    #[test]
    fn test_downward_offsets() {
        let table = SymbolTable::default();

        assert_eq!(offsets(&table, 'V'), vec![0.0, -2.25]);
        assert_eq!(offsets(&table, 'N'), vec![0.0, -2.25]);
        let down_to_gate = offsets(&table, 'D');
        assert_approx_eq!(f64, down_to_gate[1], -1.5);
        assert_eq!(offsets(&table, 'P'), vec![0.0, 0.0]);
        assert_eq!(offsets(&table, 'L'), vec![0.0, 0.0]);
    }

    #[test]
    fn test_minimal_vocabulary_drops_extended_symbols() {
        let table = SymbolTable::new(Vocabulary::Minimal);

        let symbols: String = table.symbols().map(Symbol::as_char).collect();
        assert_eq!(symbols, "IHZXBCF");
        assert!(table.stamps(Symbol::Target).is_empty());
        assert!(!table.contains(Symbol::ControlDown));
        assert_eq!(table.vocabulary(), Vocabulary::Minimal);
    }

    #[test]
    fn test_extended_vocabulary_covers_every_known_symbol() {
        let table = SymbolTable::new(Vocabulary::Extended);
        for symbol in Symbol::KNOWN {
            assert!(table.contains(symbol), "missing {symbol}");
        }
        assert!(!table.contains(Symbol::Unknown('?')));
    }

    #[test]
    fn test_stamp_place_applies_offset() {
        let stamp = Stamp::shifted(Primitive::LineUpTouching, -2.25);
        let placement = stamp.place(Point::new(1.5, 4.125));

        assert_eq!(placement.primitive(), Primitive::LineUpTouching);
        assert_eq!(placement.position(), Point::new(1.5, 1.875));
    }
}
