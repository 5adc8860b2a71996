//! CLI logic for the qcircuit picture compiler.
//!
//! This module contains the core CLI logic: configuration loading, running
//! the circuit through the library pipeline, and writing the picture.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
};

use log::info;

use qcircuit::{CircuitBuilder, QcircuitError};

/// Run the qcircuit CLI application
///
/// This function reads the input circuit, compiles it, and writes the
/// picture to the output file, or to standard output when no output path is
/// given. Nothing is written unless the input parses.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `QcircuitError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Empty input or irregular grids
/// - Export errors
pub fn run(args: &Args) -> Result<(), QcircuitError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing circuit"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config =
        config::apply_overrides(app_config, args.vocabulary.as_deref(), args.standalone)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = CircuitBuilder::new(app_config);
    let grid = builder.parse(&source)?;

    match &args.output {
        Some(path) => {
            let writer = builder.write_picture(&grid, BufWriter::new(File::create(path)?))?;
            writer
                .into_inner()
                .map_err(|err| QcircuitError::Io(err.into_error()))?;
            info!(output_file = path; "Picture exported successfully");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = builder.write_picture(&grid, stdout.lock())?;
            writer.flush()?;
        }
    }

    Ok(())
}
