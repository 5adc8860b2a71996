//! Export functionality for qcircuit layouts.
//!
//! This module provides the [`Exporter`] trait, the sink that receives the
//! picture header, each placement and the closing marker. It is the final
//! stage in the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Grid
//!     ↓ layout
//! Placements (lazy, in emission order)
//!     ↓ export (this module)
//! Picture text
//! ```
//!
//! # Available Backends
//!
//! - [`picture`] - LaTeX `picture` environment via [`picture::PictureExporter`]

/// LaTeX picture export backend.
pub mod picture;

use std::{fmt, io};

use qcircuit_core::{geometry::Bounds, primitive::Placement};

use crate::layout::Layout;

/// Abstraction for picture export backends.
///
/// Calls arrive in order: [`Exporter::begin`] once, [`Exporter::place`] for
/// every placement, then [`Exporter::finish`] once.
pub trait Exporter {
    /// Starts the picture with its bounding box.
    fn begin(&mut self, bounds: Bounds) -> Result<(), Error>;

    /// Emits one placement.
    fn place(&mut self, placement: &Placement) -> Result<(), Error>;

    /// Closes the picture.
    fn finish(&mut self) -> Result<(), Error>;

    /// Streams a whole layout through this exporter.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the backend.
    fn export_layout(&mut self, layout: &Layout<'_>) -> Result<(), Error> {
        self.begin(layout.bounds())?;
        for placement in layout.placements() {
            self.place(&placement)?;
        }
        self.finish()
    }
}

/// Errors that can occur during picture export.
///
/// Converted into [`QcircuitError::Export`] at the crate boundary.
///
/// [`QcircuitError::Export`]: crate::QcircuitError::Export
#[derive(Debug)]
pub enum Error {
    /// Calls arrived out of order, or output could not be produced.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
