mod error;

/// Points, directions and sizes used to describe where shapes are
pub mod geometry;

/// A pixel models a single colour sample in straight (non-premultiplied) 8-bit ARGB
pub mod pixel;

/// Fills map a pixel position to a colour blended with whatever is already in the frame
pub mod fill;

/// The edge table: analytic edges tagged with a vertical extent and the fill found to their right
pub mod edges;

/// The active-edge sweep turns an edge table into spans of fills along each scanline
pub mod sweep;

/// Render targets and the entry points that composite an edge table into a frame
pub mod render;

/// Builders that describe rings, pies, polygons, circles, rounded rectangles, stars and strokes as edges
pub mod shapes;

pub use error::*;
