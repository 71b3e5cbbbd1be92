use blockboard_designer::{
    compute_guides, Bounds, LayoutError, Point, SnapDetector, SnapDirection, DEFAULT_SNAP_DISTANCE,
};

fn directions(dragged: &Bounds, target: &Bounds) -> Vec<SnapDirection> {
    compute_guides(dragged, &[(1, *target)], DEFAULT_SNAP_DISTANCE)
        .into_iter()
        .map(|g| g.direction)
        .collect()
}

#[test]
fn test_exact_left_alignment_fires() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let dragged = Bounds::new(0.0, 100.0, 100.0, 150.0);

    let guides = compute_guides(&dragged, &[(1, target)], DEFAULT_SNAP_DISTANCE);
    let left = guides
        .iter()
        .find(|g| g.direction == SnapDirection::Left)
        .expect("left guide");
    assert_eq!(left.target, 1);
    assert_eq!(left.start, Point::new(0.0, 0.0));
    assert_eq!(left.end, Point::new(0.0, 150.0));

    assert_eq!(
        directions(&dragged, &target),
        vec![SnapDirection::Left, SnapDirection::Right]
    );
}

#[test]
fn test_gap_beyond_tolerance_shows_no_corner() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let dragged = Bounds::new(102.0, 200.0, 202.0, 250.0);
    assert!(directions(&dragged, &target).is_empty());
}

#[test]
fn test_gap_within_tolerance_shows_left_corners() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let dragged = Bounds::new(101.0, 200.0, 201.0, 250.0);
    assert_eq!(
        directions(&dragged, &target),
        vec![SnapDirection::BottomLeft, SnapDirection::TopLeft]
    );
}

#[test]
fn test_edge_at_exact_tolerance_does_not_fire() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let dragged = Bounds::new(1.5, 300.0, 80.0, 350.0);
    assert!(!directions(&dragged, &target).contains(&SnapDirection::Left));
}

#[test]
fn test_edge_guides_are_symmetric() {
    let a = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let b = Bounds::new(0.5, 0.8, 60.0, 200.0);
    let forward: Vec<_> = directions(&a, &b).into_iter().filter(|d| d.is_edge()).collect();
    let backward: Vec<_> = directions(&b, &a).into_iter().filter(|d| d.is_edge()).collect();
    assert_eq!(forward, backward);
    assert_eq!(forward, vec![SnapDirection::Left, SnapDirection::Bottom]);
}

#[test]
fn test_one_guide_per_direction_per_target() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let dragged = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let stationary = [(1, target), (2, target)];
    let guides = compute_guides(&dragged, &stationary, DEFAULT_SNAP_DISTANCE);

    assert_eq!(guides.len(), 8);
    let mut keys: Vec<_> = guides.iter().map(|g| g.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 8);
}

#[test]
fn test_detector_respects_enabled_flag() {
    let target = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let mut detector = SnapDetector::default();
    assert_eq!(detector.snap_distance(), 1.5);
    assert!(!detector.compute_guides(&target, &[(1, target)]).is_empty());

    detector.set_enabled(false);
    assert!(detector.compute_guides(&target, &[(1, target)]).is_empty());
}

#[test]
fn test_direction_tags() {
    for direction in SnapDirection::ALL {
        assert_eq!(direction.tag().parse::<SnapDirection>().unwrap(), direction);
        assert_ne!(direction.is_edge(), direction.is_corner());
    }
    assert_eq!(
        "diagonal".parse::<SnapDirection>(),
        Err(LayoutError::UnknownDirection("diagonal".to_string()))
    );
}
