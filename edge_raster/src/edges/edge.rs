use crate::geometry::*;

///
/// An edge that can be evaluated to find the x position where it crosses a horizontal line
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// A straight line through `start`, moving `slope` pixels horizontally for every pixel vertically
    Line { start: Point, slope: f32 },

    /// The left half of a circle
    LeftArc { center: Point, radius_squared: f32 },

    /// The right half of a circle
    RightArc { center: Point, radius_squared: f32 },
}

impl Edge {
    ///
    /// Creates a line edge passing between two points
    ///
    /// The line is anchored on the upper of the two points, so the same pair of points always generates exactly the
    /// same edge whichever order they're supplied in. This matters for shapes that share a boundary: both sides need to
    /// generate identical crossings. Horizontal lines have an infinite slope; they always have zero height so they're
    /// dropped when added to an edge table.
    ///
    #[inline]
    pub fn line_between(a: Point, b: Point) -> Edge {
        let (top, bottom) = if b.y < a.y || (b.y == a.y && b.x < a.x) { (b, a) } else { (a, b) };

        Edge::Line {
            start: top,
            slope: (bottom.x - top.x) / (bottom.y - top.y),
        }
    }

    ///
    /// Creates the left half of a circle
    ///
    #[inline]
    pub fn left_arc(center: Point, radius: f32) -> Edge {
        Edge::LeftArc { center, radius_squared: radius * radius }
    }

    ///
    /// Creates the right half of a circle
    ///
    #[inline]
    pub fn right_arc(center: Point, radius: f32) -> Edge {
        Edge::RightArc { center, radius_squared: radius * radius }
    }

    ///
    /// Finds the x position where this edge crosses the horizontal line at `y`
    ///
    /// Arcs are only defined between `center.y - radius` and `center.y + radius`. Rows are only ever sampled inside the
    /// vertical extent of an edge, so the square root never sees a meaningfully negative value, but rounding errors
    /// at the poles are clamped to zero.
    ///
    #[inline]
    pub fn eval(&self, y: f32) -> f32 {
        match self {
            Edge::Line { start, slope }                     => start.x + slope * (y - start.y),
            Edge::LeftArc { center, radius_squared }        => center.x - half_width(*radius_squared, y - center.y),
            Edge::RightArc { center, radius_squared }       => center.x + half_width(*radius_squared, y - center.y),
        }
    }
}

///
/// Half the width of a circle with the specified squared radius at a vertical offset from its centre
///
#[inline]
fn half_width(radius_squared: f32, dy: f32) -> f32 {
    (radius_squared - dy * dy).max(0.0).sqrt()
}
