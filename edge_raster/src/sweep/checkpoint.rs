use crate::fill::*;

use std::cmp::{Ordering};

///
/// The position where an edge crosses a scanline, along with the fill to its right
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    pub x:      f32,
    pub fill:   FillId,
}

impl Checkpoint {
    ///
    /// Orders checkpoints from left to right
    ///
    /// Checkpoints at exactly the same position put the ones with no fill first, so where one shape ends at the same
    /// place that another starts, the new shape's fill is the one that carries on to the right.
    ///
    #[inline]
    pub fn cmp_position(&self, other: &Checkpoint) -> Ordering {
        self.x.total_cmp(&other.x)
            .then_with(|| self.fill.is_some().cmp(&other.fill.is_some()))
    }
}
