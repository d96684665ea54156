use super::pie::*;
use super::polygon::*;
use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

use once_cell::sync::{Lazy};

use std::f32::consts::{PI};

/// Directions of the 10 corners of an upright star (alternating between outer and inner corners), starting at the top point
static STAR_CORNERS: Lazy<[Direction; 10]> = Lazy::new(|| std::array::from_fn(|idx| Direction::from_angle(-PI * 0.5 + idx as f32 * PI / 5.0)));

///
/// Moves a corner so that it is `amount` pixels away from both of the edges that meet there
///
/// `d0` points back along the incoming edge and `d1` along the outgoing one. Positive amounts move convex corners
/// inwards (and reflex corners outwards).
///
#[inline]
fn offset_corner(corner: Point, d0: Direction, d1: Direction, amount: f32) -> Point {
    corner + (d0 + d1) * (amount / cross(d0, d1).abs())
}

///
/// Draws an anti-aliased five-pointed star
///
/// `top` rotates the star: `Direction::RIGHT` draws it upright, with its first point straight above the centre, and
/// `Direction::from_angle(theta)` turns it clockwise by `theta` radians.
///
pub fn blit_star(target: &mut impl RenderTarget, center: Point, outer_radius: f32, inner_radius: f32, top: Direction, color: U8ArgbPixel) {
    const BLUR: f32 = 1.0;
    const HALF: f32 = BLUR * 0.5;

    let corners: [Point; 10]    = std::array::from_fn(|idx| {
        let radius = if idx % 2 == 0 { outer_radius } else { inner_radius };
        center + (top * STAR_CORNERS[idx]) * radius
    });
    let sides: [Direction; 10]  = std::array::from_fn(|idx| Direction::between(corners[idx], corners[(idx + 1) % 10]));

    // The solid part is inset by half a pixel (the gradient strips cover the pixel straddling each edge)
    let inner_corners: [Point; 5]   = std::array::from_fn(|idx| offset_corner(corners[idx*2 + 1], -sides[idx*2], sides[idx*2 + 1], -HALF));
    let corners: [Point; 10]        = std::array::from_fn(|idx| offset_corner(corners[idx], -sides[(idx + 9) % 10], sides[idx], HALF));

    // Each side's strip runs between the offset corners at either end
    let side_length = (corners[1] - corners[0]).dot(sides[0].as_point());

    for idx in 0..10 {
        let side = sides[idx];

        if idx % 2 == 0 {
            let gradient = LinearGradient::new(color, corners[idx], side.m90() * (1.0 / BLUR));
            blit_rectangle(target, corners[idx], Size::new(BLUR, side_length), side.m90(), gradient);
        } else {
            let gradient = LinearGradient::new(color, corners[idx] + side.p90() * BLUR, side.m90() * (1.0 / BLUR));
            blit_rectangle(target, corners[idx], Size::new(side_length, BLUR), side, gradient);
        }
    }

    // Round off the points and fill in the reflex corners
    for idx in 0..10 {
        let incoming = sides[(idx + 9) % 10];
        let outgoing = sides[idx];

        if idx % 2 == 0 {
            let gradient = RadialGradient::new(color, corners[idx], BLUR, -BLUR);
            blit_pie(target, corners[idx], BLUR, incoming.m90(), outgoing.m90(), gradient);
        } else {
            let gradient = RadialGradient::new(color, corners[idx], 0.0, BLUR);
            blit_pie(target, corners[idx], BLUR, outgoing.p90(), incoming.p90(), gradient);
        }
    }

    // The interior is a fan of triangles around the centre, which all share edges so they can go in one table
    let mut edges   = AllEdges::<32, 1>::empty();
    let solid       = edges.push_fill(color);

    for idx in 0..5 {
        edges.push_triangle(center, inner_corners[idx], corners[idx*2], solid);
        edges.push_triangle(center, inner_corners[idx], corners[(idx*2 + 2) % 10], solid);
    }

    render(target, &edges);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset_square_corner() {
        // Top-right corner of a square drawn clockwise
        let corner = offset_corner(Point::new(10.0, 0.0), Direction { x: -1.0, y: 0.0 }, Direction { x: 0.0, y: 1.0 }, 0.5);

        assert!((corner.x - 9.5).abs() < 1e-6 && (corner.y - 0.5).abs() < 1e-6, "{:?}", corner);
    }

    #[test]
    fn star_corners_alternate_around_circle() {
        assert!((STAR_CORNERS[0].angle() + PI * 0.5).abs() < 1e-6, "{:?}", STAR_CORNERS[0]);
        assert!((STAR_CORNERS[5].angle() - PI * 0.5).abs() < 1e-5, "{:?}", STAR_CORNERS[5]);
    }
}
