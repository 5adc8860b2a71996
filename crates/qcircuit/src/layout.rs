//! Layout compiler: grid cells to absolute primitive placements.
//!
//! The picture is a fixed lattice. Every qubit row occupies a band of
//! [`ROW_PITCH`] units, qubit 0 at the top. Every time step occupies
//! [`STEP_PITCH`] units: a wire segment followed by a gate column. One extra
//! lead-in wire segment sits before the first step.
//!
//! ```text
//!  x = 0     1.5       3.0       4.5       6.0
//!      │ wire │  gate s=0 │ wire │  gate s=1 │ wire │
//! ```
//!
//! Placements are produced lazily, time step outer and qubit inner, so an
//! exporter can stream them.

use std::iter;

use log::debug;

use qcircuit_core::{
    geometry::{Bounds, Point, Size},
    grid::Grid,
    primitive::{Placement, Primitive},
    vocabulary::{ROW_PITCH, SymbolTable},
};

/// Space above the first qubit band.
pub const TOP_MARGIN: f64 = 1.5;

/// Width of one wire segment.
pub const WIRE_PITCH: f64 = 1.5;

/// Width of one gate column.
pub const GATE_PITCH: f64 = 1.5;

/// Horizontal distance between two consecutive time steps.
pub const STEP_PITCH: f64 = WIRE_PITCH + GATE_PITCH;

/// A grid laid out on the picture lattice.
///
/// Coordinates are derived from the grid's dimensions on every call; nothing
/// is cached.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    grid: &'a Grid,
    table: &'a SymbolTable,
}

impl<'a> Layout<'a> {
    /// Lays out `grid`, drawing each cell with the stamps from `table`.
    pub fn new(grid: &'a Grid, table: &'a SymbolTable) -> Self {
        debug!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            vocabulary:% = table.vocabulary();
            "Laying out grid"
        );
        Self { grid, table }
    }

    /// Number of qubit rows.
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    /// Number of time steps.
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Vertical coordinate of qubit `qubit`'s wire.
    pub fn row_y(&self, qubit: usize) -> f64 {
        let top = TOP_MARGIN + self.row_count() as f64 * ROW_PITCH;
        top - TOP_MARGIN / 2.0 - ROW_PITCH * qubit as f64
    }

    /// Horizontal coordinate of time step `step`'s gate column.
    pub fn column_x(&self, step: usize) -> f64 {
        WIRE_PITCH + STEP_PITCH * step as f64
    }

    /// The picture's bounding box, anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        let size = Size::new(
            STEP_PITCH * self.column_count() as f64 + WIRE_PITCH,
            TOP_MARGIN + self.row_count() as f64 * ROW_PITCH,
        );
        Bounds::new_from_bottom_left(Point::default(), size)
    }

    /// Every placement, in emission order.
    ///
    /// 1. One lead-in wire per qubit at `x = 0`.
    /// 2. For each time step, for each qubit: the cell's stamps, then the
    ///    wire segment leading to the next step.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        let lead_in = (0..self.row_count())
            .map(move |qubit| Placement::new(Primitive::Wire, Point::new(0.0, self.row_y(qubit))));

        let steps = (0..self.column_count()).flat_map(move |step| {
            (0..self.row_count()).flat_map(move |qubit| self.cell_placements(qubit, step))
        });

        lead_in.chain(steps)
    }

    /// Number of placements [`Layout::placements`] yields, computed from the
    /// grid's symbols alone.
    pub fn placement_count(&self) -> usize {
        let stamps: usize = self
            .grid
            .symbols()
            .map(|symbol| self.table.stamps(symbol).len())
            .sum();
        let cells = self.row_count() * self.column_count();
        self.row_count() + stamps + cells
    }

    fn cell_placements(&self, qubit: usize, step: usize) -> impl Iterator<Item = Placement> + 'a {
        let anchor = Point::new(self.column_x(step), self.row_y(qubit));
        let trailing_wire = Placement::new(
            Primitive::Wire,
            anchor.add_point(Point::new(GATE_PITCH, 0.0)),
        );

        self.table
            .stamps(self.grid.symbol(qubit, step))
            .iter()
            .map(move |stamp| stamp.place(anchor))
            .chain(iter::once(trailing_wire))
    }
}
