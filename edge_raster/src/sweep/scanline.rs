use super::active_edges::*;
use super::checkpoint::*;
use super::scan_span::*;
use crate::edges::*;

use itertools::*;
use smallvec::*;

///
/// Converts an x coordinate to the nearest pixel boundary (the first column whose centre lies on or after it)
///
#[inline]
pub fn to_pixel(coord: f32) -> i32 {
    (coord + 0.5).floor() as i32
}

///
/// The y coordinate used to sample the edges on a row (the centre of its pixels)
///
#[inline]
pub fn row_center(row: i32) -> f32 {
    row as f32 + 0.5
}

///
/// Evaluates the active edges on a row, returning the checkpoints ordered from left to right
///
pub fn checkpoints_on_row<const MAX_EDGES: usize, const MAX_FILLS: usize>(edges: &AllEdges<MAX_EDGES, MAX_FILLS>, active: &ActiveEdges, row: i32) -> SmallVec<[Checkpoint; 16]> {
    let y = row_center(row);

    let mut checkpoints = active.as_slice().iter()
        .map(|edge_id| {
            let edge = edges.edge(*edge_id);
            Checkpoint { x: edge.edge.eval(y), fill: edge.fill_right }
        })
        .collect::<SmallVec<[_; 16]>>();

    checkpoints.sort_by(|a, b| a.cmp_position(b));
    checkpoints
}

///
/// Given an ordered set of checkpoints, generates the spans of pixels to fill
///
/// Each pair of neighbouring checkpoints produces a span between their pixel positions using the fill to the right
/// of the first one. Gaps that round to no pixels, and gaps with no fill, produce no span.
///
pub fn spans_from_checkpoints<'a>(checkpoints: &'a [Checkpoint]) -> impl 'a + Iterator<Item=ScanSpan> {
    checkpoints.iter()
        .tuple_windows()
        .filter_map(|(prev, next)| {
            let start   = to_pixel(prev.x);
            let end     = to_pixel(next.x);

            if end > start && prev.fill.is_some() {
                Some(ScanSpan::new(start..end, prev.fill))
            } else {
                None
            }
        })
}
