use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::render::*;

use itertools::*;

impl<const MAX_EDGES: usize, const MAX_FILLS: usize> AllEdges<MAX_EDGES, MAX_FILLS> {
    ///
    /// Adds the edges of a simple (non self-intersecting) polygon
    ///
    /// The points can be in either winding order. Polygons with no area add no edges.
    ///
    pub fn push_polygon(&mut self, points: &[Point], fill: FillId) {
        if points.len() < 3 {
            return;
        }

        // Twice the signed area: positive when the points run clockwise on screen, where the inside is to the right of each edge
        let area = points.iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f32>();

        if area == 0.0 {
            return;
        }

        for (a, b) in points.iter().copied().circular_tuple_windows() {
            if a.y == b.y {
                continue;
            }

            // For a clockwise polygon, the inside is to the right of the edges that travel upwards
            let is_downwards    = b.y > a.y;
            let fill_right      = if is_downwards == (area > 0.0) { FillId::NONE } else { fill };

            self.push_edge(a.y, b.y, fill_right, Edge::line_between(a, b));
        }
    }

    /// Adds the edges of a triangle
    #[inline]
    pub fn push_triangle(&mut self, a: Point, b: Point, c: Point, fill: FillId) {
        self.push_polygon(&[a, b, c], fill);
    }

    ///
    /// Adds a rectangle with one corner at `corner`, extending `size.x` along `direction` and `size.y` along the
    /// direction 90 degrees clockwise from it
    ///
    pub fn push_rectangle(&mut self, corner: Point, size: Size, direction: Direction, fill: FillId) {
        let along   = direction * size.x;
        let across  = direction.p90() * size.y;

        self.push_polygon(&[corner, corner + along, corner + along + across, corner + across], fill);
    }
}

///
/// Draws a triangle with a single fill
///
pub fn blit_triangle(target: &mut impl RenderTarget, a: Point, b: Point, c: Point, fill: impl Into<Fill>) {
    let mut edges = AllEdges::<3, 0>::empty();
    edges.push_triangle(a, b, c, FillId::FIRST);

    render_with_fill(target, &edges, &fill.into());
}

///
/// Draws a (possibly rotated) rectangle with a single fill
///
pub fn blit_rectangle(target: &mut impl RenderTarget, corner: Point, size: Size, direction: Direction, fill: impl Into<Fill>) {
    let mut edges = AllEdges::<4, 0>::empty();
    edges.push_rectangle(corner, size, direction, FillId::FIRST);

    render_with_fill(target, &edges, &fill.into());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn winding_order_does_not_matter() {
        let square      = [Point::new(10.0, 10.0), Point::new(20.0, 10.0), Point::new(20.0, 20.0), Point::new(10.0, 20.0)];
        let reversed    = [square[3], square[2], square[1], square[0]];

        let mut clockwise       = AllEdges::new();
        let mut anticlockwise   = AllEdges::new();
        clockwise.push_polygon(&square, FillId::FIRST);
        anticlockwise.push_polygon(&reversed, FillId::FIRST);

        let fill_at_left = |edges: &AllEdges| edges.edges()
            .filter(|(_, edge)| edge.edge.eval(15.0) < 15.0)
            .map(|(_, edge)| edge.fill_right)
            .collect::<Vec<_>>();

        assert!(clockwise.edge_count() == 2, "{:?}", clockwise);
        assert!(fill_at_left(&clockwise) == vec![FillId::FIRST], "{:?}", clockwise);
        assert!(fill_at_left(&anticlockwise) == vec![FillId::FIRST], "{:?}", anticlockwise);
    }

    #[test]
    fn flat_polygon_adds_nothing() {
        let mut edges = AllEdges::new();
        edges.push_polygon(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)], FillId::FIRST);

        assert!(edges.is_empty());
    }

    #[test]
    fn axis_aligned_rectangle() {
        let mut edges = AllEdges::new();
        edges.push_rectangle(Point::new(2.0, 3.0), Size::new(10.0, 4.0), Direction::RIGHT, FillId::FIRST);

        assert!(edges.edge_count() == 2, "{:?}", edges);
        assert!(edges.edges().all(|(_, edge)| edge.rows == (3..7)), "{:?}", edges);
    }
}
