use super::fill_program::*;
use crate::geometry::*;
use crate::pixel::*;

use std::ops::{Range};

///
/// A linear gradient between a colour and the existing pixels
///
/// The coverage at a point is `dot(point - position, direction)` clamped to `0..=1`. At a coverage of 0 the pixel is
/// set to `color`, and at a coverage of 1 the pixel is left as it was. The length of `direction` sets how quickly the
/// gradient fades: a unit direction fades over a single pixel, which is what is used for anti-aliasing edges.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub color:      U8ArgbPixel,
    pub position:   Point,
    pub direction:  Point,
}

impl LinearGradient {
    #[inline]
    pub fn new(color: U8ArgbPixel, position: Point, direction: Point) -> LinearGradient {
        LinearGradient { color, position, direction }
    }

    ///
    /// The coverage value at a point (0 is where the gradient colour is used, 1 is where the existing colour is kept)
    ///
    #[inline]
    pub fn coverage(&self, point: Point) -> f32 {
        clamp01((point - self.position).dot(self.direction))
    }

    ///
    /// Blends this gradient with an existing pixel at the specified point
    ///
    #[inline]
    pub fn blend(&self, existing: U8ArgbPixel, point: Point) -> U8ArgbPixel {
        self.color.lerp(existing, self.coverage(point))
    }
}

impl FillProgram for LinearGradient {
    fn draw_span(&self, row: &mut [U8ArgbPixel], x_range: Range<usize>, y_pos: f32) {
        for x in x_range {
            let point   = Point::new(x as f32 + 0.5, y_pos);
            row[x]      = self.blend(row[x], point);
        }
    }
}
