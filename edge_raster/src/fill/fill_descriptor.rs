use super::fill_program::*;
use super::solid_color::*;
use super::linear_gradient::*;
use super::radial_gradient::*;
use crate::pixel::*;

use std::ops::{Range};

///
/// Describes how the region to the right of an edge is filled in
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(SolidColor),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Fill {
    /// A fill that overwrites pixels with a colour
    #[inline]
    pub fn solid(color: U8ArgbPixel) -> Fill {
        Fill::Solid(SolidColor::new(color))
    }

    /// The colour that this fill blends towards
    #[inline]
    pub fn color(&self) -> U8ArgbPixel {
        match self {
            Fill::Solid(solid)              => solid.color,
            Fill::LinearGradient(gradient)  => gradient.color,
            Fill::RadialGradient(gradient)  => gradient.color,
        }
    }
}

impl FillProgram for Fill {
    #[inline]
    fn draw_span(&self, row: &mut [U8ArgbPixel], x_range: Range<usize>, y_pos: f32) {
        match self {
            Fill::Solid(solid)              => solid.draw_span(row, x_range, y_pos),
            Fill::LinearGradient(gradient)  => gradient.draw_span(row, x_range, y_pos),
            Fill::RadialGradient(gradient)  => gradient.draw_span(row, x_range, y_pos),
        }
    }
}

impl From<SolidColor> for Fill {
    #[inline]
    fn from(solid: SolidColor) -> Fill { Fill::Solid(solid) }
}

impl From<LinearGradient> for Fill {
    #[inline]
    fn from(gradient: LinearGradient) -> Fill { Fill::LinearGradient(gradient) }
}

impl From<RadialGradient> for Fill {
    #[inline]
    fn from(gradient: RadialGradient) -> Fill { Fill::RadialGradient(gradient) }
}

impl From<U8ArgbPixel> for Fill {
    #[inline]
    fn from(color: U8ArgbPixel) -> Fill { Fill::solid(color) }
}
