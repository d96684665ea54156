//!
//! # Sweep
//!
//! The sweep moves down an edge table from top to bottom. The start and end rows of every edge are sorted into a
//! single list of events, and between each pair of events the set of active edges is fixed, so a whole block of rows
//! can be rasterized with the same active set before the next event toggles an edge on or off.
//!
//! On each row, every active edge is evaluated at the centre of the row to produce a 'checkpoint' (an x position and
//! the fill to its right). Sorting the checkpoints and walking them from left to right produces the spans of pixels
//! covered by each fill.
//!
//! No winding rule is applied: the fill between two checkpoints is always the fill to the right of the left-hand
//! checkpoint. When two checkpoints are at exactly the same position, the one with no fill is ordered first, so a
//! shape that starts exactly where another one ends is the one that gets drawn.
//!

mod active_edges;
mod checkpoint;
mod scan_span;
mod scanline;
mod edge_sweep;

pub use active_edges::*;
pub use checkpoint::*;
pub use scan_span::*;
pub use scanline::*;
pub use edge_sweep::*;
