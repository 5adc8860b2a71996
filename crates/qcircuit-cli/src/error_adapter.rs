//! miette reports for [`QcircuitError`].
//!
//! The library keeps its errors free of any rendering crate. This module wraps
//! them so `miette::GraphicalReportHandler` can draw them: parser diagnostics
//! get the circuit source with their labelled lines underlined, everything
//! else becomes a single coded message.
//!
//! An irregular grid is one diagnostic with a label per offending line, but a
//! [`qcircuit_parser::error::ParseError`] may carry several diagnostics. Each
//! one becomes its own [`Report`].

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use qcircuit::QcircuitError;
use qcircuit_parser::error::{Diagnostic, Label};

/// One parser diagnostic together with the source it points into.
#[derive(Debug)]
pub struct ParseReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> ParseReport<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Display for ParseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for ParseReport<'_> {}

impl MietteDiagnostic for ParseReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diag.code()?;
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diag.help()?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            None
        } else {
            Some(Box::new(labels.iter().map(labeled_span)))
        }
    }
}

/// A [`QcircuitError`] with no source location: I/O, configuration, export.
#[derive(Debug)]
pub struct ErrorReport<'a>(pub &'a QcircuitError);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            QcircuitError::Io(_) => "qcircuit::io",
            QcircuitError::Parse { err, .. } => {
                return err.code().map(|c| Box::new(c) as Box<dyn fmt::Display>);
            }
            QcircuitError::Config(_) => "qcircuit::config",
            QcircuitError::Export(_) => "qcircuit::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            QcircuitError::Config(_) => Some(Box::new(
                "check the file passed with --config or qcircuit/config.toml",
            )),
            _ => None,
        }
    }
}

/// Anything [`reports`] can hand to a miette report handler.
#[derive(Debug)]
pub enum Report<'a> {
    Parse(ParseReport<'a>),
    Error(ErrorReport<'a>),
}

impl Report<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Report::Parse(report) => report as &dyn MietteDiagnostic,
            Report::Error(report) => report,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.inner())
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn labeled_span(label: &Label) -> LabeledSpan {
    let span = SourceSpan::new(label.span().start().into(), label.span().len());
    let text = Some(label.message().to_string());
    if label.is_primary() {
        LabeledSpan::new_primary_with_span(text, span)
    } else {
        LabeledSpan::new_with_span(text, span)
    }
}

/// Split `err` into the reports to print, in order.
///
/// A parse error yields one report per diagnostic; any other error yields one.
pub fn reports(err: &QcircuitError) -> Vec<Report<'_>> {
    match err {
        QcircuitError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Report::Parse(ParseReport::new(diag, src)))
            .collect(),
        _ => vec![Report::Error(ErrorReport(err))],
    }
}
