use blockboard_designer::{Bounds, Editor, EditorConfig, LayoutError, Point, RecordingRenderer};

fn editor_with(n: usize) -> Editor<RecordingRenderer> {
    let mut editor = Editor::new(EditorConfig::default(), RecordingRenderer::new()).unwrap();
    for _ in 0..n {
        editor.on_add_rectangle(100.0, 50.0).unwrap();
    }
    editor
}

#[test]
fn test_toggle_selection_round_trip() {
    let mut editor = editor_with(3);
    assert!(editor.toggle_selection(1).unwrap());
    assert!(editor.toggle_selection(3).unwrap());
    assert_eq!(editor.selected_ids(), vec![1, 3]);
    assert_eq!(editor.primary_selection(), Some(3));

    assert!(!editor.toggle_selection(3).unwrap());
    assert_eq!(editor.selected_ids(), vec![1]);
    assert_eq!(editor.primary_selection(), Some(1));
}

#[test]
fn test_toggle_unknown_block() {
    let mut editor = editor_with(1);
    assert_eq!(editor.toggle_selection(5), Err(LayoutError::UnknownBlock(5)));
}

#[test]
fn test_delete_selected_removes_only_selected() {
    let mut editor = editor_with(4);
    editor.toggle_selection(2).unwrap();
    editor.toggle_selection(4).unwrap();

    assert_eq!(editor.on_delete_selected(), vec![2, 4]);
    let remaining: Vec<_> = editor.blocks().map(|b| b.id).collect();
    assert_eq!(remaining, vec![1, 3]);
    assert!(editor.selected_ids().is_empty());
    assert_eq!(editor.primary_selection(), None);
}

#[test]
fn test_delete_selected_with_empty_selection() {
    let mut editor = editor_with(2);
    assert!(editor.on_delete_selected().is_empty());
    assert_eq!(editor.block_count(), 2);
}

#[test]
fn test_deleted_slot_is_reused_by_placement() {
    let mut editor = editor_with(3);
    editor.toggle_selection(1).unwrap();
    editor.on_delete_selected();

    let id = editor.on_add_rectangle(100.0, 50.0).unwrap();
    assert_eq!(id, 4);
    assert_eq!(
        editor.block(id).unwrap().bounds(),
        Bounds::new(-400.0, 250.0, -300.0, 300.0)
    );
}

#[test]
fn test_select_in_rect() {
    let mut editor = editor_with(3);
    editor.select_in_rect(&Bounds::new(-400.0, 260.0, -250.0, 270.0), false);
    assert_eq!(editor.selected_ids(), vec![1, 2]);

    editor.select_in_rect(&Bounds::new(-150.0, 260.0, -100.0, 270.0), true);
    assert_eq!(editor.selected_ids(), vec![1, 2, 3]);

    editor.select_in_rect(&Bounds::new(-150.0, 260.0, -100.0, 270.0), false);
    assert_eq!(editor.selected_ids(), vec![3]);

    editor.clear_selection();
    assert!(editor.selected_ids().is_empty());
}

#[test]
fn test_select_all() {
    let mut editor = editor_with(3);
    editor.select_all();
    assert_eq!(editor.selected_ids(), vec![1, 2, 3]);
    assert_eq!(editor.primary_selection(), Some(3));
}

#[test]
fn test_block_at_picks_topmost() {
    let mut editor = editor_with(2);
    assert_eq!(editor.block_at(Point::new(-350.0, 275.0)), Some(1));
    assert_eq!(editor.block_at(Point::new(0.0, 0.0)), None);

    // Drop block 2 on top of block 1; it was added later so it wins.
    editor
        .on_drag_move(2, Bounds::new(-380.0, 250.0, -280.0, 300.0))
        .unwrap();
    editor.on_drag_end(2);
    assert_eq!(editor.block_at(Point::new(-350.0, 275.0)), Some(2));
    assert_eq!(editor.block_at(Point::new(-395.0, 275.0)), Some(1));
}
