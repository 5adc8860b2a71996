//! Named drawing primitives understood by the picture environment.
//!
//! A [`Primitive`] is an opaque drawing unit (a gate box, a control dot, a
//! connecting line, ...). Its interior is defined by whoever renders the
//! picture; this crate only decides *which* primitive goes *where*.
//!
//! [`PrimitiveNames`] maps each primitive to the box name used in the output,
//! starting from built-in defaults and accepting per-primitive overrides.
//! [`Placement`] pairs a primitive with the absolute point it is drawn at.

use std::{collections::HashMap, fmt};

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Point;

/// A drawing primitive placed by the layout compiler.
///
/// Variant names match external configuration strings (snake_case), so a
/// `[primitives]` configuration table can override them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Plain wire segment between gate columns.
    Wire,
    /// Box that lets the wire run straight through (identity gate).
    ThroughWire,
    /// Hadamard gate box.
    Hadamard,
    /// Pauli-Z gate box.
    PauliZ,
    /// Pauli-X gate box.
    PauliX,
    /// CNOT drawn from a control on the top row down to its target.
    CnotControlTop,
    /// CNOT drawn from a control on the bottom row up to its target.
    CnotControlBottom,
    /// Filled control dot.
    ControlDot,
    /// Vertical line going up that touches the line of the row above.
    LineUpTouching,
    /// Vertical line going up that stops short, leaving room for a gate box.
    LineUpRoom,
    /// Circled-plus target symbol.
    Xor,
    /// Overlay that repairs the wire crossing the circled-plus symbol.
    XorFixer,
    /// Swap cross.
    Swap,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 13] = [
        Primitive::Wire,
        Primitive::ThroughWire,
        Primitive::Hadamard,
        Primitive::PauliZ,
        Primitive::PauliX,
        Primitive::CnotControlTop,
        Primitive::CnotControlBottom,
        Primitive::ControlDot,
        Primitive::LineUpTouching,
        Primitive::LineUpRoom,
        Primitive::Xor,
        Primitive::XorFixer,
        Primitive::Swap,
    ];

    /// Returns the box name used when no override is configured.
    pub fn default_name(self) -> &'static str {
        match self {
            Primitive::Wire => "gatesep",
            Primitive::ThroughWire => "gateunder",
            Primitive::Hadamard => "hgate",
            Primitive::PauliZ => "zgate",
            Primitive::PauliX => "xgate",
            Primitive::CnotControlTop => "cnotA",
            Primitive::CnotControlBottom => "cnotB",
            Primitive::ControlDot => "ctrldot",
            Primitive::LineUpTouching => "lineuptouch",
            Primitive::LineUpRoom => "lineuproom",
            Primitive::Xor => "xorsym",
            Primitive::XorFixer => "xorfixer",
            Primitive::Swap => "swapsym",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

/// A configured box name that the picture environment cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid box name `{name}` for primitive `{primitive}`: use ASCII letters only")]
pub struct InvalidPrimitiveName {
    primitive: Primitive,
    name: String,
}

/// Box names for every [`Primitive`], with optional overrides.
///
/// # Examples
///
/// ```
/// # use qcircuit_core::primitive::{Primitive, PrimitiveNames};
/// let mut names = PrimitiveNames::default();
/// assert_eq!(names.name(Primitive::Hadamard), "hgate");
///
/// names.set(Primitive::Hadamard, "had").unwrap();
/// assert_eq!(names.name(Primitive::Hadamard), "had");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveNames {
    overrides: HashMap<Primitive, String>,
}

impl PrimitiveNames {
    /// Returns the box name for `primitive`.
    pub fn name(&self, primitive: Primitive) -> &str {
        self.overrides
            .get(&primitive)
            .map(String::as_str)
            .unwrap_or_else(|| primitive.default_name())
    }

    /// Overrides the box name for `primitive`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPrimitiveName`] unless `name` is a non-empty run of
    /// ASCII letters, the only form a LaTeX control word can take.
    pub fn set(
        &mut self,
        primitive: Primitive,
        name: impl Into<String>,
    ) -> Result<(), InvalidPrimitiveName> {
        let name = name.into();
        check_name(primitive, &name)?;
        self.overrides.insert(primitive, name);
        Ok(())
    }

    /// Checks every configured override.
    ///
    /// Overrides loaded through serde bypass [`PrimitiveNames::set`], so
    /// callers validate them once after deserialization.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidPrimitiveName`] found, in [`Primitive::ALL`] order.
    pub fn validate(&self) -> Result<(), InvalidPrimitiveName> {
        Primitive::ALL
            .iter()
            .filter_map(|primitive| self.overrides.get(primitive).map(|name| (*primitive, name)))
            .try_for_each(|(primitive, name)| check_name(primitive, name))
    }
}

/// A primitive together with the absolute position of its reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    primitive: Primitive,
    position: Point,
}

impl Placement {
    pub fn new(primitive: Primitive, position: Point) -> Self {
        Self {
            primitive,
            position,
        }
    }

    /// The primitive to draw.
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Where the primitive's reference point goes.
    pub fn position(&self) -> Point {
        self.position
    }
}

fn check_name(primitive: Primitive, name: &str) -> Result<(), InvalidPrimitiveName> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(InvalidPrimitiveName {
            primitive,
            name: name.to_string(),
        })
    }
}
