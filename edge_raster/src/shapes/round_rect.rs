use super::pie::*;
use super::polygon::*;
use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

///
/// Draws an anti-aliased rectangle with rounded corners
///
/// `position` is the top-left corner (before rounding), the rectangle extends `size.x` along `horizontal` and `size.y`
/// along the direction 90 degrees clockwise from it. The radius is limited to half of the shorter side.
///
/// The pieces overlap, so each one is rendered on its own: the solid parts are drawn first, then the gradient strips
/// along each side and the bands around each corner are blended around them.
///
pub fn blit_round_rect(target: &mut impl RenderTarget, position: Point, size: Size, radius: f32, horizontal: Direction, color: U8ArgbPixel) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    let w       = size.x;
    let h       = size.y;
    let r       = radius.min(w * 0.5).min(h * 0.5).max(0.5);
    let right   = horizontal;
    let down    = horizontal.p90();

    // Points are found by moving along the sides of the rectangle
    let at      = |x: f32, y: f32| position + right * x + down * y;

    // Solid interior (inset by half a pixel, where the gradients take over)
    blit_rectangle(target, at(r, 0.5), Size::new(w - 2.0*r, h - 1.0), horizontal, color);
    blit_rectangle(target, at(0.5, r), Size::new(w - 1.0, h - 2.0*r), horizontal, color);

    let corners = [
        (at(r, r),          -right, -down),
        (at(w - r, r),      -down,  right),
        (at(w - r, h - r),  right,  down),
        (at(r, h - r),      down,   -right),
    ];

    for (center, begin, end) in corners {
        blit_pie(target, center, r - 0.5, begin, end, color);
    }

    // Sides fade out over a pixel, starting half a pixel inside the edge
    let sides = [
        (at(r, -0.5),       Size::new(w - 2.0*r, 1.0),  at(r, 0.5),         -down),
        (at(r, h - 0.5),    Size::new(w - 2.0*r, 1.0),  at(r, h - 0.5),     down),
        (at(-0.5, r),       Size::new(1.0, h - 2.0*r),  at(0.5, r),         -right),
        (at(w - 0.5, r),    Size::new(1.0, h - 2.0*r),  at(w - 0.5, r),     right),
    ];

    for (corner, side_size, fade_start, outwards) in sides {
        let gradient = LinearGradient::new(color, fade_start, outwards.as_point());
        blit_rectangle(target, corner, side_size, horizontal, gradient);
    }

    // Corners fade out around the arc
    for (center, begin, end) in corners {
        let mut edges   = AllEdges::<8, 1>::empty();
        let band        = edges.push_fill(RadialGradient::new(color, center, r + 0.5, -1.0));
        edges.push_ring(center, r - 0.5, r + 0.5, begin, end, band);

        render(target, &edges);
    }
}
