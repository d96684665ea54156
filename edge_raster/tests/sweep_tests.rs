use flo_edge_raster::edges::*;
use flo_edge_raster::fill::*;
use flo_edge_raster::geometry::*;
use flo_edge_raster::sweep::*;

use std::ops::{Range};

fn vertical_line(x: f32) -> Edge {
    Edge::Line { start: Point::new(x, 0.0), slope: 0.0 }
}

fn collect_blocks<const MAX_EDGES: usize, const MAX_FILLS: usize>(edges: &AllEdges<MAX_EDGES, MAX_FILLS>) -> Vec<(Range<i32>, Vec<EdgeId>)> {
    let mut blocks = vec![];

    EdgeSweep::new(edges).for_each_block(|rows, active| {
        blocks.push((rows, active.as_slice().to_vec()));
    });

    blocks
}

#[test]
fn removing_active_edge_keeps_order() {
    let mut edges   = AllEdges::new();
    let ids         = (0..4).map(|idx| edges.push_edge(0.0, 10.0, FillId::NONE, vertical_line(idx as f32)).unwrap()).collect::<Vec<_>>();

    let mut active  = ActiveEdges::with_edge_count(edges.edge_count());
    for id in ids.iter() {
        assert!(active.toggle(*id), "Edge should become active");
    }

    assert!(!active.toggle(ids[1]), "Edge should become inactive");
    assert!(active.as_slice() == &[ids[0], ids[2], ids[3]], "{:?}", active);
    assert!(!active.is_active(ids[1]) && active.is_active(ids[2]));

    assert!(!active.toggle(ids[0]));
    assert!(active.as_slice() == &[ids[2], ids[3]], "{:?}", active);

    // Re-activated edges go on the end
    assert!(active.toggle(ids[1]));
    assert!(active.as_slice() == &[ids[2], ids[3], ids[1]], "{:?}", active);
    assert!(active.len() == 3);
}

#[test]
fn sweep_single_edge() {
    let mut edges   = AllEdges::new();
    let edge        = edges.push_edge(5.0, 15.0, FillId::NONE, vertical_line(1.0)).unwrap();

    let blocks = collect_blocks(&edges);
    assert!(blocks == vec![(5..15, vec![edge])], "{:?}", blocks);
}

#[test]
fn equal_row_events_both_apply_before_next_block() {
    let mut edges   = AllEdges::new();
    let upper       = edges.push_edge(0.0, 10.0, FillId::NONE, vertical_line(1.0)).unwrap();
    let lower       = edges.push_edge(10.0, 20.0, FillId::NONE, vertical_line(2.0)).unwrap();

    let blocks = collect_blocks(&edges);
    assert!(blocks == vec![(0..10, vec![upper]), (10..20, vec![lower])], "{:?}", blocks);
}

#[test]
fn equal_row_events_in_either_order() {
    // Same as above, but the edge that starts at row 10 is added before the one that ends there
    let mut edges   = AllEdges::new();
    let lower       = edges.push_edge(10.0, 20.0, FillId::NONE, vertical_line(2.0)).unwrap();
    let upper       = edges.push_edge(0.0, 10.0, FillId::NONE, vertical_line(1.0)).unwrap();

    let blocks = collect_blocks(&edges);
    assert!(blocks == vec![(0..10, vec![upper]), (10..20, vec![lower])], "{:?}", blocks);
}

#[test]
fn gap_between_edges_has_no_block() {
    let mut edges   = AllEdges::new();
    let upper       = edges.push_edge(0.0, 10.0, FillId::NONE, vertical_line(1.0)).unwrap();
    let lower       = edges.push_edge(20.0, 30.0, FillId::NONE, vertical_line(2.0)).unwrap();

    let blocks = collect_blocks(&edges);
    assert!(blocks.iter().all(|(_, active)| !active.is_empty()), "{:?}", blocks);
    assert!(blocks == vec![(0..10, vec![upper]), (20..30, vec![lower])], "{:?}", blocks);
}

#[test]
fn empty_table_has_no_blocks() {
    let edges = AllEdges::new();

    assert!(collect_blocks(&edges).is_empty());
}

#[test]
fn ring_crossings() {
    let mut edges = AllEdges::new();
    edges.push_ring(Point::new(50.0, 50.0), 10.0, 20.0, Direction::RIGHT, Direction::RIGHT, FillId::FIRST);

    let mut crossings = vec![];
    EdgeSweep::new(&edges).for_each_block(|rows, active| {
        for row in rows {
            crossings.push((row, checkpoints_on_row(&edges, active, row).len()));
        }
    });

    let crossings_on = |row: i32| crossings.iter().find(|(crossing_row, _)| *crossing_row == row).map(|(_, count)| *count);

    assert!(crossings_on(50) == Some(4), "Row through the middle of the ring should cross 4 edges, found {:?}", crossings_on(50));
    assert!(crossings_on(35) == Some(2), "Row above the inner circle should cross 2 edges, found {:?}", crossings_on(35));
    assert!(crossings_on(25) == None, "Row above the ring should cross no edges");
}

#[test]
fn checkpoints_are_sorted() {
    let mut edges = AllEdges::new();
    edges.push_edge(0.0, 10.0, FillId::NONE, vertical_line(8.0));
    edges.push_edge(0.0, 10.0, FillId::FIRST, vertical_line(2.0));
    edges.push_edge(0.0, 10.0, FillId::FIRST, vertical_line(5.0));

    let mut checkpoints = None;
    EdgeSweep::new(&edges).for_each_block(|_, active| {
        checkpoints = Some(checkpoints_on_row(&edges, active, 5));
    });

    let positions = checkpoints.unwrap().iter().map(|checkpoint| checkpoint.x).collect::<Vec<_>>();
    assert!(positions == vec![2.0, 5.0, 8.0], "{:?}", positions);
}

#[test]
fn shared_position_puts_empty_fill_first() {
    let mut checkpoints = vec![
        Checkpoint { x: 20.0, fill: FillId::FIRST },
        Checkpoint { x: 20.0, fill: FillId::NONE },
        Checkpoint { x: 10.0, fill: FillId::FIRST },
    ];
    checkpoints.sort_by(|a, b| a.cmp_position(b));

    assert!(checkpoints[1].fill == FillId::NONE && checkpoints[2].fill == FillId::FIRST, "{:?}", checkpoints);
}

#[test]
fn spans_round_to_pixel_centers() {
    let checkpoints = vec![
        Checkpoint { x: 2.3, fill: FillId::FIRST },
        Checkpoint { x: 7.6, fill: FillId::NONE },
    ];

    let spans = spans_from_checkpoints(&checkpoints).collect::<Vec<_>>();
    assert!(spans == vec![ScanSpan::new(2..8, FillId::FIRST)], "{:?}", spans);
}

#[test]
fn spans_skip_empty_gaps() {
    let checkpoints = vec![
        Checkpoint { x: 0.0, fill: FillId::FIRST },
        Checkpoint { x: 4.0, fill: FillId::NONE },
        Checkpoint { x: 6.0, fill: FillId::FIRST },
        Checkpoint { x: 6.2, fill: FillId::NONE },
    ];

    let spans = spans_from_checkpoints(&checkpoints).collect::<Vec<_>>();
    assert!(spans == vec![ScanSpan::new(0..4, FillId::FIRST)], "Gap between 6.0 and 6.2 contains no pixel centres, found {:?}", spans);
}

#[test]
fn clip_span() {
    assert!(ScanSpan::new(-5..3, FillId::FIRST).clip(10) == Some(0..3));
    assert!(ScanSpan::new(8..30, FillId::FIRST).clip(10) == Some(8..10));
    assert!(ScanSpan::new(12..30, FillId::FIRST).clip(10) == None);
    assert!(ScanSpan::new(-12..-3, FillId::FIRST).clip(10) == None);
}
