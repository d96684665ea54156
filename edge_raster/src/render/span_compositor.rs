use crate::fill::*;
use crate::pixel::*;
use crate::sweep::*;

///
/// Composites the spans described by an ordered set of checkpoints into a row of pixels
///
/// `fill_for_id` looks up the fill to use for each span (it is only called for spans that have a fill). Spans that lie
/// partly or entirely outside of the row are clipped.
///
pub fn composite_row<'a>(row: &mut [U8ArgbPixel], row_idx: i32, checkpoints: &[Checkpoint], fill_for_id: &impl Fn(FillId) -> Option<&'a Fill>) {
    let y_pos = row_center(row_idx);

    for span in spans_from_checkpoints(checkpoints) {
        let x_range = if let Some(x_range) = span.clip(row.len()) { x_range } else { continue; };

        if let Some(fill) = fill_for_id(span.fill) {
            fill.draw_span(row, x_range, y_pos);
        }
    }
}
