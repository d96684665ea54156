use super::edge::*;
use super::edge_id::*;
use super::edge_limit::*;
use crate::fill::*;
use crate::error::*;

use tracing::{trace};

use std::ops::{Range};

///
/// An edge stored in an edge table, along with the rows where it is active and the fill to its right
///
#[derive(Clone, Debug, PartialEq)]
pub struct StoredEdge {
    pub edge:       Edge,
    pub rows:       Range<i32>,
    pub fill_right: FillId,
}

///
/// A bounded collection of edges and fills describing a scene (or a part of a scene) that can be rendered to a frame
///
/// The capacities are part of the type: adding more than `MAX_EDGES` edges or `MAX_FILLS` fills is a programming
/// error. The `push_*` functions panic if this happens, and the `try_push_*` functions return an error instead.
///
/// Tables are cheap to build and are usually thrown away after they have been rendered.
///
#[derive(Clone, Debug)]
pub struct AllEdges<const MAX_EDGES: usize = 128, const MAX_FILLS: usize = 16> {
    /// The fills, indexed by `FillId` - 1
    fills: Vec<Fill>,

    /// The edges, indexed by `EdgeId`
    edges: Vec<StoredEdge>,

    /// Two limits for every edge (unsorted)
    limits: Vec<EdgeLimit>,
}

///
/// Converts a y coordinate to the first pixel row whose centre lies on or below it
///
#[inline]
pub fn row_for_y(y: f32) -> i32 {
    (y + 0.5).floor() as i32
}

impl<const MAX_EDGES: usize, const MAX_FILLS: usize> Default for AllEdges<MAX_EDGES, MAX_FILLS> {
    fn default() -> Self {
        Self::empty()
    }
}

impl AllEdges {
    ///
    /// Creates an empty edge table with the default capacity (128 edges and 16 fills)
    ///
    /// Use `AllEdges::<MAX_EDGES, MAX_FILLS>::empty()` to create a table with a different capacity.
    ///
    pub fn new() -> AllEdges {
        AllEdges::empty()
    }
}

impl<const MAX_EDGES: usize, const MAX_FILLS: usize> AllEdges<MAX_EDGES, MAX_FILLS> {
    ///
    /// Creates an empty edge table
    ///
    pub fn empty() -> Self {
        AllEdges {
            fills:  Vec::with_capacity(MAX_FILLS),
            edges:  Vec::with_capacity(MAX_EDGES),
            limits: Vec::with_capacity(MAX_EDGES * 2),
        }
    }

    ///
    /// Adds a fill to this table, returning the ID to use for edges that have this fill on their right-hand side
    ///
    /// # Panics
    ///
    /// If the table already contains `MAX_FILLS` fills
    ///
    pub fn push_fill(&mut self, fill: impl Into<Fill>) -> FillId {
        match self.try_push_fill(fill) {
            Ok(fill_id) => fill_id,
            Err(err)    => panic!("{}", err),
        }
    }

    ///
    /// Adds a fill to this table, or returns an error if the table is full
    ///
    pub fn try_push_fill(&mut self, fill: impl Into<Fill>) -> Result<FillId, EdgeTableError> {
        if self.fills.len() >= MAX_FILLS {
            return Err(EdgeTableError::TooManyFills { capacity: MAX_FILLS });
        }

        self.fills.push(fill.into());
        Ok(FillId(self.fills.len() as u32))
    }

    ///
    /// Adds an edge that is active between the y coordinates `y0` and `y1`, with the specified fill to its right
    ///
    /// The coordinates are converted to rows by rounding to the nearest pixel boundary: the edge is active on every
    /// row whose centre lies between the two coordinates. An edge that doesn't cover any pixel centres has nothing to
    /// contribute and is dropped, in which case this returns `None`.
    ///
    /// # Panics
    ///
    /// If the table already contains `MAX_EDGES` edges (and the new edge is not dropped)
    ///
    pub fn push_edge(&mut self, y0: f32, y1: f32, fill_right: FillId, edge: Edge) -> Option<EdgeId> {
        match self.try_push_edge(y0, y1, fill_right, edge) {
            Ok(edge_id) => edge_id,
            Err(err)    => panic!("{}", err),
        }
    }

    ///
    /// Adds an edge to this table, or returns an error if the table is full
    ///
    pub fn try_push_edge(&mut self, y0: f32, y1: f32, fill_right: FillId, edge: Edge) -> Result<Option<EdgeId>, EdgeTableError> {
        let (y0, y1)    = if y1 < y0 { (y1, y0) } else { (y0, y1) };
        let row0        = row_for_y(y0);
        let row1        = row_for_y(y1);

        if row0 == row1 {
            trace!(y0, y1, "Dropping edge that covers no pixel rows");
            return Ok(None);
        }

        if self.edges.len() >= MAX_EDGES {
            return Err(EdgeTableError::TooManyEdges { capacity: MAX_EDGES });
        }

        let edge_id = EdgeId(self.edges.len());
        self.edges.push(StoredEdge { edge, rows: row0..row1, fill_right });
        self.limits.push(EdgeLimit { row: row0, edge: edge_id });
        self.limits.push(EdgeLimit { row: row1, edge: edge_id });

        Ok(Some(edge_id))
    }

    /// The number of edges in this table
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The number of fills in this table
    #[inline]
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// True if there are no edges in this table (so rendering it does nothing)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Retrieves an edge from this table
    #[inline]
    pub fn edge(&self, edge_id: EdgeId) -> &StoredEdge {
        &self.edges[edge_id.0]
    }

    /// The edges in this table, in the order they were added
    #[inline]
    pub fn edges(&self) -> impl '_ + Iterator<Item=(EdgeId, &StoredEdge)> {
        self.edges.iter().enumerate().map(|(idx, edge)| (EdgeId(idx), edge))
    }

    /// Retrieves a fill from this table (`FillId::NONE` has no fill)
    #[inline]
    pub fn fill(&self, fill_id: FillId) -> Option<&Fill> {
        fill_id.index().and_then(|idx| self.fills.get(idx))
    }

    /// The start and end limits for every edge in the table, in no particular order
    #[inline]
    pub fn limits(&self) -> &[EdgeLimit] {
        &self.limits
    }

    ///
    /// Removes all the edges and fills from this table so it can be re-used
    ///
    pub fn clear(&mut self) {
        self.fills.clear();
        self.edges.clear();
        self.limits.clear();
    }
}
