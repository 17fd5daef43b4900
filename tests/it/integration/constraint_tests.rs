//! Axis locks, bounds clamping and grid snapping.

use crate::helpers::{TestPage, assert_point_eq};
use draggable::{Axis, BoundsInsets, DragError, DragEvent, DragHost, DragOptions, Point, Rect};

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_parent_bounds_clamp_to_far_corner() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_bounds("parent"));

    // Grab 50px into the card; the stage is 600x400, the card 200x100.
    page.press(150.0, 150.0).unwrap();
    page.move_to(1000.0, 1000.0).unwrap();

    assert_point_eq(drag.translate(), Point::new(300.0, 200.0));
    assert_eq!(page.doc.bounding_rect(page.card), Rect::new(400.0, 300.0, 600.0, 400.0));
}

#[test]
fn test_parent_bounds_clamp_to_near_corner() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_bounds("parent"));

    page.press(150.0, 150.0).unwrap();
    page.move_to(-100.0, -100.0).unwrap();

    assert_point_eq(drag.translate(), Point::new(-100.0, -100.0));
    assert_eq!(page.doc.bounding_rect(page.card).top_left(), Point::ZERO);
}

#[test]
fn test_clamped_position_stays_on_boundary() {
    let mut page = TestPage::new();
    let _drag = page.attach(DragOptions::new().with_bounds("#stage"));
    let stage = page.doc.bounding_rect(page.stage);

    page.press(150.0, 150.0).unwrap();
    for (x, y) in [(5000.0, 150.0), (150.0, -900.0), (-1.0, 401.0), (700.0, 700.0)] {
        page.move_to(x, y).unwrap();
        let rect = page.doc.bounding_rect(page.card);
        assert!(rect.left >= stage.left && rect.right <= stage.right, "{rect:?}");
        assert!(rect.top >= stage.top && rect.bottom <= stage.bottom, "{rect:?}");
        let on_x_edge = rect.left == stage.left || rect.right == stage.right;
        let on_y_edge = rect.top == stage.top || rect.bottom == stage.bottom;
        assert!(on_x_edge || on_y_edge, "{rect:?} should touch the stage edge");
    }
}

#[test]
fn test_inset_bounds_against_viewport() {
    let mut page = TestPage::new();
    let insets = BoundsInsets {
        top: 0.0,
        left: 0.0,
        right: 100.0,
        bottom: 0.0,
    };
    let drag = page.attach(DragOptions::new().with_bounds(insets));

    page.press(150.0, 150.0).unwrap();
    page.move_to(2000.0, 150.0).unwrap();

    // Right edge 1000 - 100 = 900; the card is 200 wide and starts at 100.
    assert_point_eq(drag.translate(), Point::new(600.0, 0.0));
}

#[test]
fn test_bounds_follow_reflow_during_drag() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_bounds("parent"));

    page.press(150.0, 150.0).unwrap();
    page.doc.set_layout(page.card, Rect::from_xywh(100.0, 100.0, 300.0, 100.0));
    page.move_to(1000.0, 150.0).unwrap();

    assert_point_eq(drag.translate(), Point::new(200.0, 0.0));
    assert_eq!(page.doc.bounding_rect(page.card).right, 600.0);
}

#[test]
fn test_missing_bounds_selector_fails_press() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_bounds("#nowhere"));

    let err = page.press(150.0, 150.0).unwrap_err();
    assert!(matches!(err, DragError::BoundsSelectorNotFound(ref s) if s == "#nowhere"));
    assert!(!drag.is_dragging());
    assert!(page.card_events().is_empty());
}

// ============================================================================
// Grid
// ============================================================================

#[test]
fn test_grid_discards_sub_half_cell_moves() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_grid(10.0, 10.0));

    page.press(150.0, 150.0).unwrap();
    page.move_to(153.0, 154.0).unwrap();
    page.move_to(146.0, 151.0).unwrap();

    assert!(page.drag_offsets().is_empty());
    assert_point_eq(drag.translate(), Point::ZERO);
    assert!(drag.is_dragging());
}

#[test]
fn test_grid_full_cell_is_one_step() {
    let mut page = TestPage::new();
    let _drag = page.attach(DragOptions::new().with_grid(10.0, 10.0));

    page.press(150.0, 150.0).unwrap();
    page.move_to(160.0, 150.0).unwrap();

    assert_eq!(page.drag_offsets(), vec![Point::new(10.0, 0.0)]);
}

#[test]
fn test_grid_steps_from_last_accepted_position() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_grid(10.0, 10.0));

    page.press(150.0, 150.0).unwrap();
    page.move_to(160.0, 150.0).unwrap();
    page.move_to(164.0, 150.0).unwrap();
    page.move_to(166.0, 150.0).unwrap();

    assert_eq!(
        page.drag_offsets(),
        vec![Point::new(10.0, 0.0), Point::new(20.0, 0.0)]
    );
    drag.with_session(|session| {
        assert_point_eq(session.previous_final(), Point::new(170.0, 150.0));
    });
}

#[test]
fn test_invalid_grid_fails_first_move_and_ends_drag() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_grid(-1.0, 10.0));

    page.press(150.0, 150.0).unwrap();
    let err = page.move_to(170.0, 170.0).unwrap_err();

    assert!(matches!(err, DragError::InvalidGrid { axis: "x", .. }));
    assert!(!drag.is_dragging());
    assert_eq!(page.card_events(), vec![DragEvent::Start, DragEvent::End]);
}

#[test]
fn test_grid_with_bounds_snaps_clamped_position() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_bounds("parent").with_grid(40.0, 40.0));

    // Clamped pointer x is 450; delta 300 from the press is 7.5 cells -> 8.
    page.press(150.0, 150.0).unwrap();
    page.move_to(1000.0, 150.0).unwrap();

    assert_point_eq(drag.translate(), Point::new(320.0, 0.0));
}

// ============================================================================
// Axis
// ============================================================================

#[test]
fn test_axis_x_never_changes_y() {
    let mut page = TestPage::new();
    let _drag = page.attach(
        DragOptions::new()
            .with_axis(Axis::X)
            .with_default_position(0.0, 30.0),
    );

    page.drag_path(
        (150.0, 180.0),
        &[(170.0, 230.0), (180.0, 150.0), (120.0, 400.0)],
    )
    .unwrap();

    let offsets = page.drag_offsets();
    assert_eq!(offsets.len(), 3);
    assert!(offsets.iter().all(|offset| offset.y == 30.0));
    assert_eq!(
        offsets.iter().map(|offset| offset.x).collect::<Vec<_>>(),
        vec![20.0, 30.0, -30.0]
    );
}

#[test]
fn test_axis_y_never_changes_x() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_axis(Axis::Y));

    page.drag_path((150.0, 150.0), &[(400.0, 170.0)]).unwrap();

    assert_point_eq(drag.translate(), Point::new(0.0, 20.0));
}

#[test]
fn test_axis_none_still_emits_events() {
    let mut page = TestPage::new();
    let drag = page.attach(DragOptions::new().with_axis(Axis::None));

    page.drag_path((150.0, 150.0), &[(400.0, 170.0)]).unwrap();

    assert_point_eq(drag.translate(), Point::ZERO);
    assert_eq!(page.drag_offsets(), vec![Point::ZERO]);
}
