use super::frame_size::*;
use super::render_target_trait::*;
use crate::error::*;
use crate::pixel::*;

///
/// A render target of a frame of straight ARGB u8 pixels, borrowed from the caller
///
/// `stride` is the distance in pixels between the start of each row, which can be larger than the width of the frame
/// (for instance when rendering to a region of a larger buffer).
///
#[derive(Debug)]
pub struct ArgbFrame<'a> {
    width:      usize,
    height:     usize,
    stride:     usize,
    pixel_data: &'a mut [U8ArgbPixel],
}

impl<'a> ArgbFrame<'a> {
    ///
    /// Creates an ArgbFrame render target from a buffer of U8ArgbPixel pixels (returns an error if the buffer is not big enough)
    ///
    pub fn from_pixels(width: usize, height: usize, stride: usize, data: &'a mut [U8ArgbPixel]) -> Result<Self, FrameError> {
        if stride < width {
            return Err(FrameError::StrideTooNarrow { width, stride });
        }

        // The last row doesn't need any padding after it
        let needed = if height == 0 { Some(0) } else { (height-1).checked_mul(stride).and_then(|rows| rows.checked_add(width)) };
        let needed = needed.unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(FrameError::BufferTooSmall { needed, found: data.len() });
        }

        Ok(ArgbFrame {
            width:      width,
            height:     height,
            stride:     stride,
            pixel_data: data,
        })
    }

    ///
    /// Creates an ArgbFrame render target from a buffer of u8 values (which will be treated as A, R, G, B pixels)
    ///
    /// The stride is measured in pixels, not bytes.
    ///
    #[inline]
    pub fn from_bytes(width: usize, height: usize, stride: usize, data: &'a mut [u8]) -> Result<Self, FrameError> {
        Self::from_pixels(width, height, stride, data.to_argb_slice_mut())
    }

    #[inline] pub fn width(&self) -> usize  { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn stride(&self) -> usize { self.stride }

    ///
    /// Reads the pixel at a particular position
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> U8ArgbPixel {
        self.row(y)[x]
    }

    ///
    /// Sets every pixel in the frame (but not the padding between rows) to a colour
    ///
    pub fn clear(&mut self, color: U8ArgbPixel) {
        for y in 0..self.height {
            self.row_mut(y).iter_mut().for_each(|pixel| *pixel = color);
        }
    }
}

impl<'a> RenderTarget for ArgbFrame<'a> {
    #[inline]
    fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    #[inline]
    fn row(&self, y: usize) -> &[U8ArgbPixel] {
        let start = y * self.stride;
        &self.pixel_data[start..(start + self.width)]
    }

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [U8ArgbPixel] {
        let start = y * self.stride;
        &mut self.pixel_data[start..(start + self.width)]
    }
}
