//! Unit tests for the document listener registry and hit testing.

use crate::helpers::{TestPage, TestPageBuilder};
use draggable::dom::{PointerListener, SharedListener};
use draggable::{
    DragError, DragHost, DragResult, NativeEventType, Point, PointerEvent, Size,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Records the event types it sees and optionally fails
struct Recorder {
    seen: Vec<NativeEventType>,
    fail: bool,
}

impl PointerListener for Recorder {
    fn handle_pointer(
        &mut self,
        _host: &mut dyn DragHost,
        event: &mut PointerEvent,
    ) -> DragResult<()> {
        self.seen.push(event.event_type);
        if self.fail {
            return Err(DragError::NestedCancel);
        }
        Ok(())
    }
}

fn recorder(fail: bool) -> Arc<Mutex<Recorder>> {
    Arc::new(Mutex::new(Recorder {
        seen: Vec::new(),
        fail,
    }))
}

#[test]
fn test_listener_only_receives_its_event_type() {
    let mut page = TestPage::new();
    let rec = recorder(false);
    let listener: SharedListener = rec.clone();
    page.doc.add_pointer_listener(NativeEventType::MouseDown, listener);

    page.move_to(10.0, 10.0).unwrap();
    page.press(10.0, 10.0).unwrap();

    assert_eq!(rec.lock().seen, vec![NativeEventType::MouseDown]);
}

#[test]
fn test_remove_listener_by_id() {
    let mut page = TestPage::new();
    let rec = recorder(false);
    let listener: SharedListener = rec.clone();
    let id = page.doc.add_pointer_listener(NativeEventType::MouseUp, listener);

    assert!(page.doc.remove_pointer_listener(id));
    assert!(!page.doc.remove_pointer_listener(id));
    page.release(10.0, 10.0).unwrap();

    assert!(rec.lock().seen.is_empty());
}

#[test]
fn test_failing_listener_does_not_block_later_ones() {
    let mut page = TestPage::new();
    let failing = recorder(true);
    let later = recorder(false);
    let first: SharedListener = failing.clone();
    let second: SharedListener = later.clone();
    page.doc.add_pointer_listener(NativeEventType::MouseMove, first);
    page.doc.add_pointer_listener(NativeEventType::MouseMove, second);

    let err = page.move_to(10.0, 10.0).unwrap_err();

    assert!(matches!(err, DragError::NestedCancel));
    assert_eq!(failing.lock().seen, vec![NativeEventType::MouseMove]);
    assert_eq!(later.lock().seen, vec![NativeEventType::MouseMove]);
}

#[test]
fn test_first_of_several_errors_is_returned() {
    /// Always fails with a missing handle named after itself
    struct Failing(&'static str);

    impl PointerListener for Failing {
        fn handle_pointer(
            &mut self,
            _host: &mut dyn DragHost,
            _event: &mut PointerEvent,
        ) -> DragResult<()> {
            Err(DragError::HandleNotFound(self.0.to_string()))
        }
    }

    let mut page = TestPage::new();
    let first: SharedListener = Arc::new(Mutex::new(Failing(".a")));
    let second: SharedListener = Arc::new(Mutex::new(Failing(".b")));
    page.doc.add_pointer_listener(NativeEventType::MouseUp, first);
    page.doc.add_pointer_listener(NativeEventType::MouseUp, second);

    let err = page.release(10.0, 10.0).unwrap_err();
    assert!(matches!(err, DragError::HandleNotFound(ref s) if s == ".a"));
}

#[test]
fn test_hit_test_prefers_deepest_element() {
    let page = TestPage::new();

    assert_eq!(page.doc.element_at(Point::new(280.0, 110.0)), Some(page.close));
    assert_eq!(page.doc.element_at(Point::new(150.0, 110.0)), Some(page.handle));
    assert_eq!(page.doc.element_at(Point::new(150.0, 150.0)), Some(page.content));
    assert_eq!(page.doc.element_at(Point::new(450.0, 300.0)), Some(page.other));
    assert_eq!(page.doc.element_at(Point::new(700.0, 500.0)), Some(page.doc.body()));
    assert_eq!(page.doc.element_at(Point::new(5000.0, 5000.0)), None);
}

#[test]
fn test_mouse_event_targets_element_under_pointer() {
    let mut page = TestPage::new();

    let event = page.press(280.0, 110.0).unwrap();
    assert_eq!(event.target, page.close);

    let event = page.press(5000.0, 5000.0).unwrap();
    assert_eq!(event.target, page.doc.body());
}

#[test]
fn test_touch_end_without_contacts_has_no_position() {
    let mut page = TestPage::new();

    let event = page.doc.touch(NativeEventType::TouchEnd, &[]).unwrap();

    assert_eq!(event.position, None);
    assert_eq!(event.target, page.doc.body());
}

#[test]
fn test_viewport_resize_moves_body_edges() {
    let mut page = TestPageBuilder::new().with_viewport(640.0, 480.0).build();
    assert_eq!(page.doc.viewport_size(), Size::new(640.0, 480.0));

    page.doc.set_viewport(Size::new(1280.0, 720.0));

    let body = page.doc.body();
    assert_eq!(page.doc.bounding_rect(body).right, 1280.0);
    assert_eq!(page.doc.element_at(Point::new(1200.0, 700.0)), Some(body));
}

#[test]
fn test_unsupported_selector_syntax_is_rejected() {
    let page = TestPage::new();

    for selector in ["div > span", "a + b", "[data-x]", ":hover", ""] {
        let err = page.doc.query_selector(None, selector).unwrap_err();
        assert!(matches!(err, DragError::InvalidSelector { .. }), "{selector}");
    }
    assert_eq!(
        page.doc.query_selector(None, "#stage .handle").unwrap(),
        Some(page.handle)
    );
    assert_eq!(
        page.doc.query_selector(Some(page.card), "div, button").unwrap(),
        Some(page.close)
    );
}
