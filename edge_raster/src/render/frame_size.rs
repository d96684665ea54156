///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    #[inline]
    pub fn new(width: usize, height: usize) -> FrameSize {
        FrameSize { width, height }
    }

    /// The number of rows in this frame, as a row coordinate
    #[inline]
    pub (crate) fn height_rows(&self) -> i32 {
        self.height.min(i32::MAX as usize) as i32
    }
}
