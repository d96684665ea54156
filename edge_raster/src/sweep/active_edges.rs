use crate::edges::*;

///
/// Tracks which edges are active during a sweep
///
/// The active edges are kept in the order that they were activated. Alongside this is a lookup table from edge ID to
/// the slot holding that edge (plus one, so that 0 can mean 'inactive'), which makes testing whether or not an edge is
/// active a constant-time operation. Removing an edge shifts every following edge down a slot, so the relative order of
/// the remaining edges never changes.
///
#[derive(Clone, Debug)]
pub struct ActiveEdges {
    /// The active edges (only the first `count` entries are meaningful)
    slots: Vec<EdgeId>,

    /// Maps edge IDs to their slot index + 1, or 0 for edges that are not active
    slot_lookup: Vec<usize>,

    /// The number of active edges
    count: usize,
}

impl ActiveEdges {
    ///
    /// Creates an empty set of active edges for a table containing the specified number of edges
    ///
    pub fn with_edge_count(edge_count: usize) -> ActiveEdges {
        ActiveEdges {
            slots:          vec![EdgeId(0); edge_count],
            slot_lookup:    vec![0; edge_count],
            count:          0,
        }
    }

    ///
    /// Activates an inactive edge or deactivates an active one, returning true if the edge is now active
    ///
    pub fn toggle(&mut self, edge: EdgeId) -> bool {
        if self.slot_lookup[edge.0] != 0 {
            self.deactivate(edge);
            false
        } else {
            self.activate(edge);
            true
        }
    }

    ///
    /// Adds an edge to the end of the active list (the edge must not already be active)
    ///
    fn activate(&mut self, edge: EdgeId) {
        self.slots[self.count]      = edge;
        self.slot_lookup[edge.0]    = self.count + 1;
        self.count                  += 1;
    }

    ///
    /// Removes an active edge, shifting the edges after it down to close the gap
    ///
    fn deactivate(&mut self, edge: EdgeId) {
        let removed_slot = self.slot_lookup[edge.0] - 1;

        self.slot_lookup[edge.0]    = 0;
        self.count                  -= 1;

        for slot in removed_slot..self.count {
            let moved_edge = self.slots[slot + 1];

            self.slot_lookup[moved_edge.0]  -= 1;
            self.slots[slot]                = moved_edge;
        }
    }

    /// True if the specified edge is currently active
    #[inline]
    pub fn is_active(&self, edge: EdgeId) -> bool {
        self.slot_lookup[edge.0] != 0
    }

    /// The number of active edges
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The active edges, in activation order
    #[inline]
    pub fn as_slice(&self) -> &[EdgeId] {
        &self.slots[0..self.count]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn activate_in_order() {
        let mut active = ActiveEdges::with_edge_count(4);

        assert!(active.toggle(EdgeId(2)));
        assert!(active.toggle(EdgeId(0)));
        assert!(active.toggle(EdgeId(3)));

        assert!(active.as_slice() == &[EdgeId(2), EdgeId(0), EdgeId(3)], "{:?}", active);
        assert!(active.is_active(EdgeId(0)));
        assert!(!active.is_active(EdgeId(1)));
    }

    #[test]
    fn removal_preserves_order_and_lookup() {
        let mut active = ActiveEdges::with_edge_count(5);

        for edge in [4, 1, 3, 0, 2] {
            active.toggle(EdgeId(edge));
        }

        // Remove from the middle
        assert!(!active.toggle(EdgeId(3)));
        assert!(active.as_slice() == &[EdgeId(4), EdgeId(1), EdgeId(0), EdgeId(2)], "{:?}", active);

        // The lookup table must have followed the shifted edges: removing the last edge must remove the right slot
        assert!(!active.toggle(EdgeId(2)));
        assert!(active.as_slice() == &[EdgeId(4), EdgeId(1), EdgeId(0)], "{:?}", active);

        // Remove from the front
        assert!(!active.toggle(EdgeId(4)));
        assert!(active.as_slice() == &[EdgeId(1), EdgeId(0)], "{:?}", active);

        // Re-activating appends to the end
        assert!(active.toggle(EdgeId(3)));
        assert!(active.as_slice() == &[EdgeId(1), EdgeId(0), EdgeId(3)], "{:?}", active);
        assert!(active.len() == 3);
    }

    #[test]
    fn remove_everything() {
        let mut active = ActiveEdges::with_edge_count(3);

        for edge in [0, 1, 2, 1, 0, 2] {
            active.toggle(EdgeId(edge));
        }

        assert!(active.is_empty());
        assert!(!active.is_active(EdgeId(0)) && !active.is_active(EdgeId(1)) && !active.is_active(EdgeId(2)));
    }
}
