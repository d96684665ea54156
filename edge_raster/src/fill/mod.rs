//!
//! # Fills
//!
//! A fill describes what happens to the pixels in the region to the right of an edge. There are three kinds:
//!
//! * `SolidColor` overwrites the pixels with a colour
//! * `LinearGradient` fades from its colour (where the gradient starts) to the existing pixels as the distance along
//!   its direction increases
//! * `RadialGradient` fades from the existing pixels to its colour as the distance from its centre increases past a
//!   start radius
//!
//! Gradients are mostly used to anti-alias the edges of shapes: a 1 pixel wide strip with a gradient fill is placed
//! along the boundary of a shape so that it blends smoothly with whatever was drawn beforehand.
//!

mod fill_program;
mod fill_id;
mod solid_color;
mod linear_gradient;
mod radial_gradient;
mod fill_descriptor;

pub use fill_program::*;
pub use fill_id::*;
pub use solid_color::*;
pub use linear_gradient::*;
pub use radial_gradient::*;
pub use fill_descriptor::*;
