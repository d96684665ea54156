use flo_edge_raster::*;
use flo_edge_raster::edges::*;
use flo_edge_raster::fill::*;
use flo_edge_raster::geometry::*;
use flo_edge_raster::pixel::*;

#[test]
fn line_eval() {
    let line = Edge::Line { start: Point::new(5.0, 10.0), slope: 2.0 };

    assert!(line.eval(12.0) == 9.0, "Line should cross y=12 at x=9, found {}", line.eval(12.0));
    assert!(line.eval(10.0) == 5.0, "Line should cross y=10 at x=5, found {}", line.eval(10.0));
}

#[test]
fn right_arc_eval() {
    let arc = Edge::RightArc { center: Point::new(0.0, 0.0), radius_squared: 25.0 };

    assert!(arc.eval(0.0) == 5.0, "Found {}", arc.eval(0.0));
    assert!(arc.eval(3.0) == 4.0, "Found {}", arc.eval(3.0));
    assert!(arc.eval(-3.0) == 4.0, "Found {}", arc.eval(-3.0));
}

#[test]
fn left_arc_eval() {
    let arc = Edge::left_arc(Point::new(10.0, 10.0), 5.0);

    assert!(arc.eval(10.0) == 5.0, "Found {}", arc.eval(10.0));
    assert!(arc.eval(13.0) == 6.0, "Found {}", arc.eval(13.0));
}

#[test]
fn arc_eval_at_pole_is_center() {
    // Rounding errors past the pole of an arc are clamped rather than producing NaN
    let arc = Edge::right_arc(Point::new(10.0, 10.0), 5.0);

    assert!(arc.eval(15.0) == 10.0, "Found {}", arc.eval(15.0));
    assert!(arc.eval(15.0001) == 10.0, "Found {}", arc.eval(15.0001));
}

#[test]
fn line_between_is_same_in_either_order() {
    let a = Point::new(3.0, 20.0);
    let b = Point::new(7.0, 4.0);

    assert!(Edge::line_between(a, b) == Edge::line_between(b, a), "{:?} {:?}", Edge::line_between(a, b), Edge::line_between(b, a));
}

#[test]
fn row_rounding() {
    assert!(row_for_y(10.2) == 10);
    assert!(row_for_y(10.4) == 10);
    assert!(row_for_y(10.5) == 11);
    assert!(row_for_y(10.6) == 11);
    assert!(row_for_y(-0.2) == 0);
    assert!(row_for_y(-0.7) == -1);
}

#[test]
fn edges_covering_no_pixel_centers_are_dropped() {
    let mut edges   = AllEdges::new();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    assert!(edges.push_edge(10.2, 10.4, FillId::NONE, line).is_none(), "Edge between two centres should be dropped");
    assert!(edges.push_edge(10.6, 11.4, FillId::NONE, line).is_none(), "Edge between two centres should be dropped");
    assert!(edges.is_empty(), "{:?}", edges);
}

#[test]
fn edge_crossing_pixel_center_is_kept() {
    let mut edges   = AllEdges::new();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    let edge_id     = edges.push_edge(10.2, 10.6, FillId::NONE, line);

    assert!(edge_id.is_some(), "Edge crossing y=10.5 should be kept");
    assert!(edges.edge(edge_id.unwrap()).rows == (10..11), "{:?}", edges.edge(edge_id.unwrap()));
}

#[test]
fn edge_ends_are_swapped_if_reversed() {
    let mut edges   = AllEdges::new();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    let edge_id     = edges.push_edge(20.0, 5.0, FillId::NONE, line).unwrap();

    assert!(edges.edge(edge_id).rows == (5..20), "{:?}", edges.edge(edge_id));
}

#[test]
fn every_edge_has_two_limits() {
    let mut edges   = AllEdges::new();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    let first       = edges.push_edge(0.0, 10.0, FillId::NONE, line).unwrap();
    let second      = edges.push_edge(5.0, 15.0, FillId::NONE, line).unwrap();

    let mut limits  = edges.limits().to_vec();
    limits.sort_by_key(|limit| (limit.row, limit.edge));

    assert!(limits == vec![
        EdgeLimit { row: 0, edge: first },
        EdgeLimit { row: 5, edge: second },
        EdgeLimit { row: 10, edge: first },
        EdgeLimit { row: 15, edge: second },
    ], "{:?}", limits);
}

#[test]
fn fill_ids_are_one_based() {
    let mut edges   = AllEdges::new();
    let red         = edges.push_fill(U8ArgbPixel::opaque(255, 0, 0));
    let blue        = edges.push_fill(U8ArgbPixel::opaque(0, 0, 255));

    assert!(red == FillId::FIRST);
    assert!(red.index() == Some(0) && blue.index() == Some(1));
    assert!(FillId::NONE.index().is_none());
    assert!(edges.fill(FillId::NONE).is_none());
    assert!(edges.fill(blue) == Some(&Fill::solid(U8ArgbPixel::opaque(0, 0, 255))));
}

#[test]
fn try_push_edge_reports_full_table() {
    let mut edges   = AllEdges::<2, 1>::empty();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    assert!(edges.try_push_edge(0.0, 10.0, FillId::NONE, line).is_ok());
    assert!(edges.try_push_edge(0.0, 10.0, FillId::NONE, line).is_ok());

    let result = edges.try_push_edge(0.0, 10.0, FillId::NONE, line);
    assert!(result == Err(EdgeTableError::TooManyEdges { capacity: 2 }), "{:?}", result);

    // Dropped edges don't need any room
    assert!(edges.try_push_edge(0.0, 0.2, FillId::NONE, line) == Ok(None));
}

#[test]
fn try_push_fill_reports_full_table() {
    let mut edges = AllEdges::<2, 1>::empty();

    assert!(edges.try_push_fill(U8ArgbPixel::BLACK).is_ok());

    let result = edges.try_push_fill(U8ArgbPixel::WHITE);
    assert!(result == Err(EdgeTableError::TooManyFills { capacity: 1 }), "{:?}", result);
}

#[test]
#[should_panic]
fn too_many_edges() {
    let mut edges   = AllEdges::<2, 1>::empty();
    let line        = Edge::Line { start: Point::new(0.0, 0.0), slope: 0.0 };

    edges.push_edge(0.0, 10.0, FillId::NONE, line);
    edges.push_edge(0.0, 10.0, FillId::NONE, line);
    edges.push_edge(0.0, 10.0, FillId::NONE, line);
}

#[test]
#[should_panic]
fn too_many_fills() {
    let mut edges = AllEdges::<2, 1>::empty();

    edges.push_fill(U8ArgbPixel::BLACK);
    edges.push_fill(U8ArgbPixel::WHITE);
}

#[test]
fn clear_empties_table() {
    let mut edges = AllEdges::new();

    let fill = edges.push_fill(U8ArgbPixel::BLACK);
    edges.push_rectangle(Point::new(0.0, 0.0), Size::new(10.0, 10.0), Direction::RIGHT, fill);
    edges.clear();

    assert!(edges.is_empty() && edges.fill_count() == 0 && edges.limits().is_empty());
}
