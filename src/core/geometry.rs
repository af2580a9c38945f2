//! Almost all nontrivial graphics programs are built on a foundation
//! of geometric classes. Sampling only needs the 2D point type which
//! carries a pair of uniform coordinates from a point generator to
//! the alias table.

// pbrt
use crate::core::pbrt::Float;

/// A 2D point, ideally in [0,1)^2 when produced by a point generator.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

impl Point2f {
    pub fn new(x: Float, y: Float) -> Self {
        Point2f { x, y }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
    /// Both coordinates lie in the half-open unit square.
    pub fn inside_unit_square(&self) -> bool {
        self.x >= 0.0 as Float && self.x < 1.0 as Float && self.y >= 0.0 as Float && self.y < 1.0 as Float
    }
}
