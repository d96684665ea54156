use super::edge_id::*;

///
/// Marks the row where an edge starts or stops being active
///
/// Every edge in a table has two limits. The edge table does not record which is which: the sweep toggles an edge
/// whenever it meets one of its limits, so the first limit turns the edge on and the second turns it off again.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLimit {
    pub row:    i32,
    pub edge:   EdgeId,
}
