//!
//! # Geometry
//!
//! Shapes are described using single-precision points in pixel coordinates: `(0, 0)` is the top-left corner of the
//! frame and `y` increases downwards, so the centre of the pixel in row `i` and column `j` is at `(j + 0.5, i + 0.5)`.
//!
//! `Direction` is a unit vector. Multiplying two directions composes their rotations (in the same way as multiplying
//! two complex numbers), which is how the shape builders rotate their control points.
//!

mod point;
mod direction;
mod size;

pub use point::*;
pub use direction::*;
pub use size::*;
