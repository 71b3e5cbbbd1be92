use blockboard_designer::{Bounds, LayoutError, PlacementPlanner, PlacementPolicy, Point};

fn planner() -> PlacementPlanner {
    PlacementPlanner::new(800.0, 600.0, 10.0).unwrap()
}

#[test]
fn test_first_block_at_top_left() {
    let placement = planner().place(100.0, 50.0, &[]).unwrap();
    assert_eq!(placement.anchor, Point::new(-400.0, 300.0));
    assert_eq!(placement.bounds, Bounds::new(-400.0, 250.0, -300.0, 300.0));
    assert_eq!(placement.center(), Point::new(-350.0, 275.0));
}

#[test]
fn test_second_block_offset_by_width_and_padding() {
    let planner = planner();
    let first = planner.place(100.0, 50.0, &[]).unwrap();
    let second = planner.place(100.0, 50.0, &[first.bounds]).unwrap();
    assert_eq!(second.anchor, Point::new(-290.0, 300.0));
    assert_eq!(second.anchor.x - first.anchor.x, 110.0);
}

#[test]
fn test_step_uses_requested_width() {
    let planner = planner();
    let first = planner.place(100.0, 50.0, &[]).unwrap();
    let wide = planner.place(200.0, 100.0, &[first.bounds]).unwrap();
    assert_eq!(wide.anchor, Point::new(-190.0, 300.0));
}

#[test]
fn test_touching_is_not_overlap() {
    let planner = PlacementPlanner::new(800.0, 600.0, 0.0).unwrap();
    let existing = [Bounds::new(-400.0, 250.0, -300.0, 300.0)];
    let placement = planner.place(100.0, 50.0, &existing).unwrap();
    assert_eq!(placement.anchor, Point::new(-300.0, 300.0));
}

#[test]
fn test_fills_canvas_then_exhausts() {
    let planner = planner();
    let mut placed = Vec::new();
    for _ in 0..70 {
        let placement = planner.place(100.0, 50.0, &placed).unwrap();
        assert!(placed.iter().all(|b: &Bounds| !b.intersects(&placement.bounds)));
        placed.push(placement.bounds);
    }

    // Seven per row, ten rows
    assert_eq!(placed[7].max_y, 240.0);
    assert_eq!(placed[69].min_y, -290.0);

    let err = planner.place(100.0, 50.0, &placed).unwrap_err();
    assert_eq!(
        err,
        LayoutError::LayoutExhausted {
            width: 100.0,
            height: 50.0
        }
    );
    assert!(err.is_placement_error());
}

#[test]
fn test_unbounded_policy_continues_below_canvas() {
    let planner = planner().with_policy(PlacementPolicy::Unbounded);
    let mut placed = Vec::new();
    for _ in 0..71 {
        placed.push(planner.place(100.0, 50.0, &placed).unwrap().bounds);
    }
    let last = placed[70];
    assert_eq!(last.max_y, -300.0);
    assert_eq!(last.min_x, -400.0);
}

#[test]
fn test_rejects_block_larger_than_canvas() {
    let err = planner().place(900.0, 50.0, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::LayoutExhausted { .. }));
}

#[test]
fn test_rejects_invalid_dimensions() {
    assert!(matches!(
        planner().place(0.0, 50.0, &[]),
        Err(LayoutError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        planner().place(100.0, f64::NAN, &[]),
        Err(LayoutError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_planner_rejects_stalling_padding() {
    assert!(matches!(
        PlacementPlanner::new(800.0, 600.0, -100.0),
        Err(LayoutError::InvalidConfig(_))
    ));
    assert!(matches!(
        PlacementPlanner::new(800.0, 600.0, f64::NAN),
        Err(LayoutError::InvalidConfig(_))
    ));
}

#[test]
fn test_scan_terminates_on_a_blocked_canvas() {
    let planner = PlacementPlanner::new(800.0, 600.0, 0.0).unwrap();
    let blocker = Bounds::new(-400.0, -300.0, 400.0, 300.0);
    assert!(matches!(
        planner.place(10.0, 10.0, &[blocker]),
        Err(LayoutError::LayoutExhausted { .. })
    ));

    let unbounded = planner.with_policy(PlacementPolicy::Unbounded);
    let everything = Bounds::new(-1e9, -1e9, 1e9, 1e9);
    assert!(matches!(
        unbounded.place(10.0, 10.0, &[everything]),
        Err(LayoutError::LayoutExhausted { .. })
    ));
}
