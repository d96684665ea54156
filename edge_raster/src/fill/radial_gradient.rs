use super::fill_program::*;
use crate::geometry::*;
use crate::pixel::*;

use std::ops::{Range};

///
/// A radial gradient between the existing pixels and a colour
///
/// The coverage at a point is `(distance(point, position) - start_radius) / thickness` clamped to `0..=1`. This blends
/// in the opposite direction to `LinearGradient`: a coverage of 0 leaves the existing pixel and 1 sets it to `color`.
///
/// A negative thickness reverses the fade, so `RadialGradient { start_radius: r, thickness: -r, .. }` is solid at
/// the centre and fades out towards the radius `r`.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub color:          U8ArgbPixel,
    pub position:       Point,
    pub start_radius:   f32,
    pub thickness:      f32,
}

impl RadialGradient {
    #[inline]
    pub fn new(color: U8ArgbPixel, position: Point, start_radius: f32, thickness: f32) -> RadialGradient {
        RadialGradient { color, position, start_radius, thickness }
    }

    ///
    /// The coverage value at a point (0 is where the existing colour is kept, 1 is where the gradient colour is used)
    ///
    #[inline]
    pub fn coverage(&self, point: Point) -> f32 {
        clamp01(((point - self.position).len() - self.start_radius) / self.thickness)
    }

    ///
    /// Blends this gradient with an existing pixel at the specified point
    ///
    #[inline]
    pub fn blend(&self, existing: U8ArgbPixel, point: Point) -> U8ArgbPixel {
        existing.lerp(self.color, self.coverage(point))
    }
}

impl FillProgram for RadialGradient {
    fn draw_span(&self, row: &mut [U8ArgbPixel], x_range: Range<usize>, y_pos: f32) {
        for x in x_range {
            let point   = Point::new(x as f32 + 0.5, y_pos);
            row[x]      = self.blend(row[x], point);
        }
    }
}
