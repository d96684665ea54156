use super::fill_program::*;
use crate::pixel::*;

use std::ops::{Range};

///
/// Fill that writes out a solid colour, replacing the existing pixels
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidColor {
    pub color: U8ArgbPixel,
}

impl SolidColor {
    #[inline]
    pub fn new(color: U8ArgbPixel) -> SolidColor {
        SolidColor { color }
    }
}

impl FillProgram for SolidColor {
    #[inline]
    fn draw_span(&self, row: &mut [U8ArgbPixel], x_range: Range<usize>, _y_pos: f32) {
        for pixel in row[x_range].iter_mut() {
            *pixel = self.color;
        }
    }
}
