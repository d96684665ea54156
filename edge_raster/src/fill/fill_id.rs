///
/// Identifies a fill within an edge table
///
/// Fill IDs are 1-based: `FillId::NONE` (0) means that nothing is drawn to the right of an edge.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FillId(pub (crate) u32);

impl FillId {
    /// The region to the right of the edge is left untouched
    pub const NONE: FillId = FillId(0);

    /// The first fill added to a table, also used to mark filled regions for tables rendered with `render_with_fill()`
    pub const FIRST: FillId = FillId(1);

    /// True if this identifies a fill (rather than the empty region)
    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != 0
    }

    /// The index of this fill in the fill table, if it is not `NONE`
    #[inline]
    pub fn index(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some((self.0 - 1) as usize)
        }
    }
}
