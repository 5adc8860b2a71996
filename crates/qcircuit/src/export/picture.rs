//! LaTeX `picture` environment backend.
//!
//! Writes placements as `\put(x, y){\usebox{\name}}` commands. The boxes
//! themselves are defined elsewhere (typically with `\newsavebox` in the
//! document preamble).
//!
//! ```text
//! \setlength{\unitlength}{.2in}
//! \begin{picture}(4.5, 3.75)(0, 0)
//! \put(0.0, 3.0){\usebox{\gatesep}}
//! \put(1.5, 3.0){\usebox{\hgate}}
//! \put(3.0, 3.0){\usebox{\gatesep}}
//! \end{picture}
//! ```

use std::io::Write;

use log::{debug, trace};

use qcircuit_core::{
    geometry::Bounds,
    primitive::{Placement, PrimitiveNames},
};

use crate::{
    config::PictureConfig,
    export::{Error, Exporter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Open,
    Closed,
}

/// Format a coordinate the way picture commands expect it.
///
/// Whole numbers keep one decimal place (`3.0`); anything else uses the
/// shortest decimal that round-trips (`1.875`).
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Streams a picture to any [`Write`] sink.
pub struct PictureExporter<'a, W: Write> {
    writer: W,
    config: &'a PictureConfig,
    names: &'a PrimitiveNames,
    state: State,
}

impl<'a, W: Write> PictureExporter<'a, W> {
    /// Create a picture exporter writing to `writer`.
    pub fn new(writer: W, config: &'a PictureConfig, names: &'a PrimitiveNames) -> Self {
        Self {
            writer,
            config,
            names,
            state: State::Ready,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn expect_state(&self, expected: State, action: &str) -> Result<(), Error> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::Render(format!(
                "cannot {action} while the picture is {:?}",
                self.state
            )))
        }
    }
}

impl<W: Write> Exporter for PictureExporter<'_, W> {
    fn begin(&mut self, bounds: Bounds) -> Result<(), Error> {
        self.expect_state(State::Ready, "begin")?;

        if self.config.standalone() {
            writeln!(self.writer, "\\documentclass{{standalone}}")?;
            if let Some(preamble) = self.config.preamble() {
                writeln!(self.writer, "\\input{{{preamble}}}")?;
            }
            writeln!(self.writer, "\\begin{{document}}")?;
        }

        writeln!(
            self.writer,
            "\\setlength{{\\unitlength}}{{{}}}",
            self.config.unit_length()
        )?;
        let origin = bounds.min_point();
        writeln!(
            self.writer,
            "\\begin{{picture}}({}, {})({}, {})",
            number(bounds.width()),
            number(bounds.height()),
            origin.x(),
            origin.y()
        )?;

        debug!(
            width = bounds.width(),
            height = bounds.height(),
            standalone = self.config.standalone();
            "Picture started"
        );
        self.state = State::Open;
        Ok(())
    }

    fn place(&mut self, placement: &Placement) -> Result<(), Error> {
        self.expect_state(State::Open, "place a primitive")?;

        let position = placement.position();
        let name = self.names.name(placement.primitive());
        trace!(primitive:% = placement.primitive(), x = position.x(), y = position.y(); "Placing primitive");
        writeln!(
            self.writer,
            "\\put({}, {}){{\\usebox{{\\{name}}}}}",
            number(position.x()),
            number(position.y())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.expect_state(State::Open, "finish")?;

        writeln!(self.writer, "\\end{{picture}}")?;
        if self.config.standalone() {
            writeln!(self.writer, "\\end{{document}}")?;
        }
        self.writer.flush()?;

        self.state = State::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qcircuit_core::{
        geometry::{Point, Size},
        primitive::Primitive,
    };

    use super::*;

    fn bounds() -> Bounds {
        Bounds::new_from_bottom_left(Point::default(), Size::new(4.5, 3.75))
    }

    fn render(config: &PictureConfig, names: &PrimitiveNames, placements: &[Placement]) -> String {
        let mut picture = PictureExporter::new(Vec::new(), config, names);
        picture.begin(bounds()).unwrap();
        for placement in placements {
            picture.place(placement).unwrap();
        }
        picture.finish().unwrap();
        String::from_utf8(picture.into_inner()).unwrap()
    }

    #[test]
    fn test_number_format() {
        assert_eq!(number(0.0), "0.0");
        assert_eq!(number(3.0), "3.0");
        assert_eq!(number(1.875), "1.875");
        assert_eq!(number(4.5), "4.5");
        assert_eq!(number(15.75), "15.75");
        assert_eq!(number(8_999_998.5), "8999998.5");
        assert_eq!(number(9_000_000.0), "9000000.0");
    }

    #[test]
    fn test_picture_output() {
        let config = PictureConfig::default();
        let names = PrimitiveNames::default();
        let output = render(
            &config,
            &names,
            &[
                Placement::new(Primitive::Wire, Point::new(0.0, 3.0)),
                Placement::new(Primitive::Hadamard, Point::new(1.5, 3.0)),
            ],
        );

        assert_eq!(
            output,
            "\\setlength{\\unitlength}{.2in}\n\
             \\begin{picture}(4.5, 3.75)(0, 0)\n\
             \\put(0.0, 3.0){\\usebox{\\gatesep}}\n\
             \\put(1.5, 3.0){\\usebox{\\hgate}}\n\
             \\end{picture}\n"
        );
    }

    #[test]
    fn test_standalone_document() {
        let config = PictureConfig::new("5mm", true, Some("boxes.tex".to_string()));
        let names = PrimitiveNames::default();
        let output = render(&config, &names, &[]);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "\\documentclass{standalone}");
        assert_eq!(lines[1], "\\input{boxes.tex}");
        assert_eq!(lines[2], "\\begin{document}");
        assert_eq!(lines[3], "\\setlength{\\unitlength}{5mm}");
        assert_eq!(lines[lines.len() - 2], "\\end{picture}");
        assert_eq!(lines[lines.len() - 1], "\\end{document}");
    }

    #[test]
    fn test_standalone_without_preamble() {
        let config = PictureConfig::new(".2in", true, None);
        let names = PrimitiveNames::default();
        let output = render(&config, &names, &[]);

        assert!(!output.contains("\\input"));
        assert!(output.starts_with("\\documentclass{standalone}\n\\begin{document}\n"));
    }

    #[test]
    fn test_renamed_primitive() {
        let config = PictureConfig::default();
        let mut names = PrimitiveNames::default();
        names.set(Primitive::Xor, "oplus").unwrap();

        let output = render(
            &config,
            &names,
            &[Placement::new(Primitive::Xor, Point::new(1.5, 0.75))],
        );
        assert!(output.contains("\\put(1.5, 0.75){\\usebox{\\oplus}}\n"));
    }

    #[test]
    fn test_place_before_begin_fails() {
        let config = PictureConfig::default();
        let names = PrimitiveNames::default();
        let mut picture = PictureExporter::new(Vec::new(), &config, &names);

        let result = picture.place(&Placement::new(Primitive::Wire, Point::default()));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(picture.finish().is_err());
    }

    #[test]
    fn test_begin_twice_fails() {
        let config = PictureConfig::default();
        let names = PrimitiveNames::default();
        let mut picture = PictureExporter::new(Vec::new(), &config, &names);

        picture.begin(bounds()).unwrap();
        assert!(picture.begin(bounds()).is_err());
    }
}
