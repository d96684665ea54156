use super::frame_size::*;
use crate::pixel::*;

///
/// Trait implemented by types that can act as a render target
///
/// Rows are supplied as slices exactly `width` pixels long, so any padding between rows is never touched.
///
pub trait RenderTarget {
    /// The size of this target in pixels
    fn size(&self) -> FrameSize;

    /// The pixels in a row of this target (`y` must be less than the height)
    fn row(&self, y: usize) -> &[U8ArgbPixel];

    /// The pixels in a row of this target, for writing (`y` must be less than the height)
    fn row_mut(&mut self, y: usize) -> &mut [U8ArgbPixel];
}
