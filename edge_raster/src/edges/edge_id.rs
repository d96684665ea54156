///
/// Identifies an edge within an edge table
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub (crate) usize);

impl EdgeId {
    /// The position of this edge in its table
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
