//! qcircuit CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use qcircuit_cli::{Args, error_adapter::reports};

fn main() {
    miette::set_panic_hook();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match Args::usage_line(&err) {
            Some(line) => {
                println!("{line}");
                process::exit(2);
            }
            None => err.exit(),
        },
    };

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting qcircuit");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = qcircuit_cli::run(&args) {
        // One-line summary on stdout, full report through the logger
        println!("{err}");

        let reporter = miette::GraphicalReportHandler::new();
        for report in reports(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &report)
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
