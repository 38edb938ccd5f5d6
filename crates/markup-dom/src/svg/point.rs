//! Coordinates.

use std::fmt;

/// A point, displayed as `x,y` the way SVG coordinate lists expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<S> {
    /// Horizontal coordinate.
    pub x: S,
    /// Vertical coordinate.
    pub y: S,
}

impl<S> Point<S> {
    /// Creates a point.
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl Point<f32> {
    /// The point at angle `radians` on a circle of `radius` around the
    /// origin. Angles run counterclockwise on screen, so `y` is negated.
    pub fn from_radians(radians: f32, radius: f32) -> Self {
        Self::new(radius * radians.cos(), radius * -radians.sin())
    }
}

impl Point<f64> {
    /// The point at angle `radians` on a circle of `radius` around the
    /// origin. Angles run counterclockwise on screen, so `y` is negated.
    pub fn from_radians(radians: f64, radius: f64) -> Self {
        Self::new(radius * radians.cos(), radius * -radians.sin())
    }
}

impl<S: fmt::Display> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
