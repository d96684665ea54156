use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

///
/// Draws an anti-aliased filled circle
///
/// The circle is a solid disc plus a band one pixel wide around its edge, where the colour fades into the existing
/// pixels. The disc and the band share their boundary, so they can go in the same edge table.
///
pub fn blit_circle(target: &mut impl RenderTarget, center: Point, radius: f32, color: U8ArgbPixel) {
    if radius <= 0.0 {
        return;
    }

    let mut edges   = AllEdges::<8, 2>::empty();
    let band_inner  = (radius - 0.5).max(0.0);

    if band_inner > 0.0 {
        let disc = edges.push_fill(color);
        edges.push_ring(center, 0.0, band_inner, Direction::RIGHT, Direction::RIGHT, disc);
    }

    let band = edges.push_fill(RadialGradient::new(color, center, radius + 0.5, -1.0));
    edges.push_ring(center, band_inner, radius + 0.5, Direction::RIGHT, Direction::RIGHT, band);

    render(target, &edges);
}
