//!
//! # Edge table
//!
//! An edge table describes a 2D scene as a set of analytic edges, each active over a half-open range of pixel rows
//! and each naming the fill that applies to the region immediately to its right. There is no winding rule: the fill
//! at any point on a scanline is simply the fill to the right of the nearest edge to its left, so shapes that do not
//! overlap can be placed in the same table, including shapes that share a boundary.
//!
//! Edges are lines or the left/right halves of circles. Curves that need more than half a circle are split up by the
//! shape builders before they reach the table.
//!

mod edge;
mod edge_id;
mod edge_limit;
mod all_edges;

pub use edge::*;
pub use edge_id::*;
pub use edge_limit::*;
pub use all_edges::*;
