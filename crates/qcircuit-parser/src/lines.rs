//! Line splitter for circuit source text.
//!
//! Splits the source into qubit lines, strips line terminators (`\n`, and a
//! `\r` left over from CRLF endings) and drops lines that end up empty. Each
//! kept line carries its byte span so later diagnostics can point at it.

use winnow::{
    Parser as _,
    combinator::opt,
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::take_till,
};

use crate::{
    error::{Diagnostic, ParseError},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Parse one raw line, consuming its `\n` terminator if present.
fn raw_line<'a>(input: &mut Input<'a>) -> IResult<Spanned<&'a str>> {
    let (text, range) = take_till(0.., '\n').with_span().parse_next(input)?;
    opt('\n').void().parse_next(input)?;

    let line = match text.strip_suffix('\r') {
        Some(stripped) => Spanned::new(stripped, Span::new(range.start..range.end - 1)),
        None => Spanned::new(text, Span::new(range)),
    };
    Ok(line)
}

/// Split `source` into non-empty qubit lines.
///
/// Lines made only of spaces are kept; only zero-length lines are dropped.
pub(crate) fn qubit_lines(source: &str) -> Result<Vec<Spanned<&str>>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut lines = Vec::new();

    while !input.is_empty() {
        let line = raw_line(&mut input)
            .map_err(|err| Diagnostic::error(format!("failed to split input into lines: {err}")))?;

        if !line.inner().is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        qubit_lines(source)
            .unwrap()
            .iter()
            .map(|line| *line.inner())
            .collect()
    }

    #[test]
    fn test_splits_on_newlines() {
        assert_eq!(texts("HZ\nXI\n"), vec!["HZ", "XI"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(texts("HZ\nXI"), vec!["HZ", "XI"]);
    }

    #[test]
    fn test_strips_carriage_returns() {
        assert_eq!(texts("HZ\r\nXI\r\n"), vec!["HZ", "XI"]);
        assert_eq!(texts("HZ\r"), vec!["HZ"]);
    }

    #[test]
    fn test_drops_blank_lines() {
        assert_eq!(texts("\n\nHZ\n\r\n\nXI\n\n"), vec!["HZ", "XI"]);
    }

    #[test]
    fn test_keeps_whitespace_only_lines() {
        assert_eq!(texts("HZ\n  \n"), vec!["HZ", "  "]);
    }

    #[test]
    fn test_empty_source() {
        assert!(texts("").is_empty());
        assert!(texts("\n\r\n\n").is_empty());
    }

    #[test]
    fn test_spans_point_at_line_text() {
        let source = "HZ\r\n\nXI\n";
        let lines = qubit_lines(source).unwrap();

        assert_eq!(lines[0].span(), Span::new(0..2));
        assert_eq!(lines[1].span(), Span::new(5..7));
        assert_eq!(&source[lines[1].span().start()..lines[1].span().end()], "XI");
    }
}
