//! Geometric primitives for circuit layout and placement.
//!
//! This module provides the small set of geometric types used to position
//! drawing primitives inside a picture.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in picture units
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Coordinates follow the LaTeX `picture` environment convention:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//!
//! All values are expressed in multiples of the picture's unit length.

/// A 2D point representing a position in picture coordinate space.
///
/// # Examples
///
/// ```
/// # use qcircuit_core::geometry::Point;
/// let anchor = Point::new(1.5, 6.375);
/// let offset = Point::new(0.0, -2.25);
///
/// let moved = anchor.add_point(offset);
/// assert_eq!(moved.x(), 1.5);
/// assert_eq!(moved.y(), 4.125);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of a picture or element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a bottom-left point and a size
    ///
    /// # Examples
    ///
    /// ```
    /// # use qcircuit_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_bottom_left(Point::default(), Size::new(4.5, 3.75));
    /// assert_eq!(bounds.max_x(), 4.5);
    /// assert_eq!(bounds.max_y(), 3.75);
    /// ```
    pub fn new_from_bottom_left(bottom_left: Point, size: Size) -> Self {
        Self {
            min_x: bottom_left.x,
            min_y: bottom_left.y,
            max_x: bottom_left.x + size.width,
            max_y: bottom_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the bottom-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns true if the point lies inside the bounds, edges included
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
