use super::render_target_trait::*;
use super::span_compositor::*;
use crate::edges::*;
use crate::fill::*;
use crate::sweep::*;

use tracing::{trace};

///
/// Renders an edge table to a render target, using the fills stored in the table
///
pub fn render<const MAX_EDGES: usize, const MAX_FILLS: usize>(target: &mut impl RenderTarget, edges: &AllEdges<MAX_EDGES, MAX_FILLS>) {
    render_with_fill_lookup(target, edges, &|fill_id| edges.fill(fill_id))
}

///
/// Renders an edge table using a single fill for every region that has a fill
///
/// This is useful for shapes that only have one fill: the `fill_right` of each edge only needs to distinguish between
/// `FillId::NONE` and any other value, and the fill table can be left empty.
///
pub fn render_with_fill<const MAX_EDGES: usize, const MAX_FILLS: usize>(target: &mut impl RenderTarget, edges: &AllEdges<MAX_EDGES, MAX_FILLS>, fill: &Fill) {
    render_with_fill_lookup(target, edges, &|_| Some(fill))
}

///
/// Sweeps an edge table and composites each span into the target
///
fn render_with_fill_lookup<'a, const MAX_EDGES: usize, const MAX_FILLS: usize>(target: &mut impl RenderTarget, edges: &AllEdges<MAX_EDGES, MAX_FILLS>, fill_for_id: &impl Fn(FillId) -> Option<&'a Fill>) {
    if edges.is_empty() {
        return;
    }

    let size = target.size();
    trace!(edges = edges.edge_count(), fills = edges.fill_count(), width = size.width, height = size.height, "Rendering edge table");

    let sweep       = EdgeSweep::new(edges);
    let last_row    = size.height_rows();

    sweep.for_each_block(|rows, active| {
        // Rows outside of the frame are skipped
        let rows = rows.start.max(0)..rows.end.min(last_row);

        for row_idx in rows {
            let checkpoints = checkpoints_on_row(edges, active, row_idx);
            composite_row(target.row_mut(row_idx as usize), row_idx, &checkpoints, fill_for_id);
        }
    });
}

///
/// Renders a set of independent frames, each with its own edge table
///
/// With the `multithreading` feature, the frames are rendered in parallel.
///
#[cfg(feature="multithreading")]
pub fn render_frames<TTarget, const MAX_EDGES: usize, const MAX_FILLS: usize>(jobs: &mut [(TTarget, &AllEdges<MAX_EDGES, MAX_FILLS>)])
where
    TTarget: RenderTarget + Send,
{
    use rayon::prelude::*;

    jobs.par_iter_mut()
        .for_each(|(target, edges)| render(target, *edges));
}

///
/// Renders a set of independent frames, each with its own edge table
///
/// With the `multithreading` feature, the frames are rendered in parallel.
///
#[cfg(not(feature="multithreading"))]
pub fn render_frames<TTarget, const MAX_EDGES: usize, const MAX_FILLS: usize>(jobs: &mut [(TTarget, &AllEdges<MAX_EDGES, MAX_FILLS>)])
where
    TTarget: RenderTarget + Send,
{
    jobs.iter_mut()
        .for_each(|(target, edges)| render(target, *edges));
}
