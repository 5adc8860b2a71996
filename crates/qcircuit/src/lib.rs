//! qcircuit - Compile text grids of quantum gates into LaTeX pictures.
//!
//! A circuit is written as one line of single-letter symbols per qubit. Each
//! column is a time step. The compiler parses the grid, places a drawing
//! primitive for every cell on a fixed lattice, and writes the placements as a
//! LaTeX `picture` environment.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use qcircuit_core::{geometry, grid, primitive, vocabulary};

pub use error::QcircuitError;

use std::io::Write;

use log::{debug, info, trace};

use qcircuit_core::{grid::Grid, vocabulary::SymbolTable};

use config::AppConfig;
use export::{Exporter, picture::PictureExporter};
use layout::Layout;

/// Builder for parsing and rendering circuit pictures.
///
/// # Examples
///
/// ```
/// use qcircuit::{CircuitBuilder, config::AppConfig};
///
/// let builder = CircuitBuilder::new(AppConfig::default());
///
/// let grid = builder.parse("H\n").expect("Failed to parse");
/// let picture = builder.render_picture(&grid).expect("Failed to render");
///
/// assert!(picture.contains("\\put(1.5, 3.0){\\usebox{\\hgate}}"));
/// ```
pub struct CircuitBuilder {
    config: AppConfig,
    table: SymbolTable,
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl CircuitBuilder {
    /// Create a new circuit builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration: picture options, vocabulary and box names
    pub fn new(config: AppConfig) -> Self {
        let table = SymbolTable::new(config.vocabulary().kind());
        Self { config, table }
    }

    /// The configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The symbol table selected by the configured vocabulary.
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Parse circuit source into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`QcircuitError::Parse`] when the source has no qubit line or
    /// its lines differ in length.
    pub fn parse(&self, source: &str) -> Result<Grid, QcircuitError> {
        info!("Parsing circuit");

        let grid = qcircuit_parser::parse(source)
            .map_err(|err| QcircuitError::new_parse_error(err, source))?;

        debug!(
            qubits = grid.row_count(),
            steps = grid.column_count();
            "Circuit parsed successfully"
        );
        trace!(grid:?; "Parsed grid");

        Ok(grid)
    }

    /// Lay out `grid` on the picture lattice.
    ///
    /// The returned [`Layout`] yields placements lazily; nothing is computed
    /// until it is iterated.
    pub fn compile<'a>(&'a self, grid: &'a Grid) -> Layout<'a> {
        Layout::new(grid, &self.table)
    }

    /// Lay out `grid` and stream the picture into `writer`.
    ///
    /// Returns the writer once the picture is complete.
    ///
    /// # Errors
    ///
    /// Returns [`QcircuitError::Export`] if writing fails.
    pub fn write_picture<W: Write>(&self, grid: &Grid, writer: W) -> Result<W, QcircuitError> {
        let layout = self.compile(grid);
        info!(placements = layout.placement_count(); "Exporting picture");

        let mut picture =
            PictureExporter::new(writer, self.config.picture(), self.config.primitives());
        picture.export_layout(&layout)?;

        info!("Picture exported successfully");
        Ok(picture.into_inner())
    }

    /// Render `grid` to a picture string.
    ///
    /// # Errors
    ///
    /// Returns [`QcircuitError::Export`] if rendering fails.
    pub fn render_picture(&self, grid: &Grid) -> Result<String, QcircuitError> {
        let bytes = self.write_picture(grid, Vec::new())?;
        String::from_utf8(bytes)
            .map_err(|err| export::Error::Render(err.to_string()))
            .map_err(QcircuitError::from)
    }
}
