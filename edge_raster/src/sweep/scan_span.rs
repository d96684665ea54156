use crate::fill::*;

use std::ops::{Range};
use std::fmt;

///
/// A ScanSpan indicates which fill to apply to a range of pixels along a scanline
///
#[derive(Clone, PartialEq, Eq)]
pub struct ScanSpan {
    /// The pixels to draw on the scanline
    pub x_range: Range<i32>,

    /// The fill to draw over this range
    pub fill: FillId,
}

impl ScanSpan {
    #[inline]
    pub fn new(x_range: Range<i32>, fill: FillId) -> ScanSpan {
        ScanSpan { x_range, fill }
    }

    ///
    /// Restricts this span to the columns `0..width`, returning the columns as `usize` values (or `None` if nothing is
    /// left after clipping)
    ///
    #[inline]
    pub fn clip(&self, width: usize) -> Option<Range<usize>> {
        let width = width as i64;
        let start = (self.x_range.start as i64).max(0).min(width);
        let end   = (self.x_range.end as i64).max(0).min(width);

        if start < end {
            Some((start as usize)..(end as usize))
        } else {
            None
        }
    }
}

impl fmt::Debug for ScanSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({:?}: {:?})", self.x_range, self.fill)
    }
}
