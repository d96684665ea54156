use crate::pixel::*;

use std::ops::{Range};

///
/// A fill program describes how to draw pixels along a span of a scanline
///
pub trait FillProgram {
    ///
    /// Draws a series of pixels to a row of a frame buffer
    ///
    /// `row` is the whole row of the frame, `x_range` provides the range of columns to draw and `y_pos` is the
    /// y coordinate of the centre of the row's pixels.
    ///
    fn draw_span(&self, row: &mut [U8ArgbPixel], x_range: Range<usize>, y_pos: f32);
}

/// Restricts a coverage value to the range `0..=1`
#[inline]
pub (crate) fn clamp01(t: f32) -> f32 {
    t.max(0.0).min(1.0)
}
