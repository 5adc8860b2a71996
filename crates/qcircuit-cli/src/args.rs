//! Command-line argument definitions for the qcircuit CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, picture options, and logging verbosity.

use clap::{CommandFactory, Parser};

use qcircuit::{
    grid::Symbol,
    vocabulary::{SymbolTable, Vocabulary},
};

/// Lists every symbol, minimal vocabulary first, in table order.
fn symbols_help() -> String {
    let minimal = SymbolTable::new(Vocabulary::Minimal);
    let extended = SymbolTable::new(Vocabulary::Extended);

    let mut help = String::from(
        "Circuit files hold one line of symbols per qubit, top to bottom. Every\n\
         column is one time step, and all lines must have the same length.\n\n\
         Symbols:\n",
    );
    for symbol in minimal.symbols() {
        help.push_str(&symbol_line(symbol));
    }

    help.push_str("\nExtended vocabulary only:\n");
    for symbol in extended.symbols().filter(|symbol| !minimal.contains(*symbol)) {
        help.push_str(&symbol_line(symbol));
    }

    help.push_str("\nAny other character draws nothing.");
    help
}

fn symbol_line(symbol: Symbol) -> String {
    format!("  {symbol}  {}\n", symbol.description())
}

/// Command-line arguments for the qcircuit picture compiler
#[derive(Parser, Debug)]
#[command(
    name = "qcircuit",
    author,
    version,
    about,
    long_about = None,
    after_long_help = symbols_help()
)]
pub struct Args {
    /// Path to the input circuit file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Write the picture to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Symbol vocabulary (minimal, extended), overrides the configuration
    #[arg(long)]
    pub vocabulary: Option<String>,

    /// Wrap the picture in a standalone LaTeX document
    #[arg(long)]
    pub standalone: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Condense a usage error into one line: the reason, then the usage.
    ///
    /// Returns `None` for help and version requests, which are not errors.
    pub fn usage_line(err: &clap::Error) -> Option<String> {
        if !err.use_stderr() {
            return None;
        }

        let usage = Self::command().render_usage().to_string();
        let usage = usage.split_whitespace().collect::<Vec<_>>().join(" ");
        Some(match err.kind().as_str() {
            Some(reason) => format!("{reason}. {usage}"),
            None => usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["qcircuit", "bell.qc"]).unwrap();

        assert_eq!(args.input, "bell.qc");
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.vocabulary.is_none());
        assert!(!args.standalone);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "qcircuit",
            "bell.qc",
            "-o",
            "bell.tex",
            "-c",
            "qcircuit.toml",
            "--vocabulary",
            "minimal",
            "--standalone",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.output.as_deref(), Some("bell.tex"));
        assert_eq!(args.config.as_deref(), Some("qcircuit.toml"));
        assert_eq!(args.vocabulary.as_deref(), Some("minimal"));
        assert!(args.standalone);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_long_help_lists_every_symbol() {
        let help = symbols_help();

        for symbol in Symbol::KNOWN {
            assert!(
                help.contains(&format!("  {symbol}  {}\n", symbol.description())),
                "missing {symbol}"
            );
        }

        let (minimal, extended) = help.split_once("Extended vocabulary only:").unwrap();
        assert!(minimal.contains("  C  "));
        assert!(!minimal.contains("  O  "));
        assert!(extended.contains("  O  "));
        assert!(!extended.contains("  H  "));
    }

    #[test]
    fn test_long_help_is_attached() {
        let rendered = Args::command().render_long_help().to_string();
        assert!(rendered.contains("Extended vocabulary only:"));
    }

    #[test]
    fn test_missing_input_is_one_usage_line() {
        let err = Args::try_parse_from(["qcircuit"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let line = Args::usage_line(&err).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.ends_with("Usage: qcircuit [OPTIONS] <INPUT>"), "{line}");
    }

    #[test]
    fn test_extra_input_is_one_usage_line() {
        let err = Args::try_parse_from(["qcircuit", "a.qc", "b.qc"]).unwrap_err();

        let line = Args::usage_line(&err).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("Usage: qcircuit [OPTIONS] <INPUT>"), "{line}");
    }

    #[test]
    fn test_help_and_version_are_not_usage_errors() {
        let err = Args::try_parse_from(["qcircuit", "--help"]).unwrap_err();
        assert!(Args::usage_line(&err).is_none());

        let err = Args::try_parse_from(["qcircuit", "--version"]).unwrap_err();
        assert!(Args::usage_line(&err).is_none());
    }
}
