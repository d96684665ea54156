use super::active_edges::*;
use crate::edges::*;

use itertools::*;
use smallvec::*;

use std::ops::{Range};

///
/// Sweeps an edge table from top to bottom, tracking which edges are active on each block of rows
///
pub struct EdgeSweep<'a, const MAX_EDGES: usize, const MAX_FILLS: usize> {
    /// The table being swept
    edges: &'a AllEdges<MAX_EDGES, MAX_FILLS>,

    /// The start and end events for every edge, sorted by row
    events: SmallVec<[EdgeLimit; 32]>,
}

impl<'a, const MAX_EDGES: usize, const MAX_FILLS: usize> EdgeSweep<'a, MAX_EDGES, MAX_FILLS> {
    ///
    /// Prepares to sweep an edge table
    ///
    pub fn new(edges: &'a AllEdges<MAX_EDGES, MAX_FILLS>) -> Self {
        let mut events = edges.limits().iter().copied().collect::<SmallVec<[_; 32]>>();

        // Events on the same row can be processed in any order: they're all applied before the next block of rows
        events.sort_by_key(|limit| limit.row);

        EdgeSweep { edges, events }
    }

    /// The edge table being swept
    #[inline]
    pub fn edges(&self) -> &'a AllEdges<MAX_EDGES, MAX_FILLS> {
        self.edges
    }

    /// The events in the order they are processed
    #[inline]
    pub fn events(&self) -> &[EdgeLimit] {
        &self.events
    }

    ///
    /// Calls a function for every block of rows where the set of active edges is fixed
    ///
    /// Blocks are supplied from top to bottom and never overlap. Rows with no active edges are skipped: a block is only
    /// generated between two events on different rows.
    ///
    pub fn for_each_block(&self, mut block: impl FnMut(Range<i32>, &ActiveEdges)) {
        let first_event = if let Some(first_event) = self.events.first() { first_event } else { return; };

        let mut active = ActiveEdges::with_edge_count(self.edges.edge_count());
        active.toggle(first_event.edge);

        for (prev, next) in self.events.iter().tuple_windows() {
            if next.row > prev.row && !active.is_empty() {
                block(prev.row..next.row, &active);
            }

            active.toggle(next.edge);
        }
    }
}
