//!
//! # Shapes
//!
//! Shape builders describe shapes as edges in an edge table. The `push_*` functions add a shape's edges to an
//! existing table (so several shapes can be drawn with a single sweep) and the `blit_*` functions build a table for
//! a shape and render it straight away.
//!
//! Shapes in the same table must not overlap, but they may share a boundary: builders always generate identical
//! edges for identical geometry, so the sweep can tell that one shape ends exactly where the next one starts.
//!
//! Anti-aliased shapes are built from a solid interior plus strips one pixel wide along their boundary that are filled
//! with gradients fading into whatever was drawn before.
//!

mod arc;
mod ring;
mod pie;
mod polygon;
mod circle;
mod round_rect;
mod star;
mod bezier;
mod point;

pub use ring::*;
pub use pie::*;
pub use polygon::*;
pub use circle::*;
pub use round_rect::*;
pub use star::*;
pub use bezier::*;
pub use point::*;
