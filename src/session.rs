//! Drag session - all mutable state for one attached element.
//!
//! The session is a plain struct driven by `&mut self` methods, so the state
//! machine can be exercised directly against any `DragHost` without going
//! through document listeners. Pointer handlers live in `input`.

use crate::constants::{TOUCH_ACTION_PROPERTY, USER_SELECT_PROPERTY};
use crate::dom::PointerListener;
use crate::error::DragResult;
use crate::events::{DragEvent, PointerEvent, PointerPhase};
use crate::geometry::{Point, SnapCache};
use crate::host::{DragHost, NodeId};
use crate::input::DragState;
use crate::options::DragOptions;
use crate::placement::Placement;
use tracing::{debug, warn};

pub struct DragSession {
    pub(crate) node: NodeId,
    pub(crate) options: DragOptions,
    pub(crate) state: DragState,
    /// Authoritative output offset; survives across drags
    pub(crate) translate: Point,
    /// Pointer position minus translate at drag start
    pub(crate) initial_anchor: Point,
    /// Last accepted (clamped, snapped) pointer position
    pub(crate) previous_final: Point,
    pub(crate) snap_cache: SnapCache,
    /// Body `user-select` value to restore when the drag ends
    pub(crate) saved_user_select: Option<Option<String>>,
}

impl DragSession {
    /// Session starting at the configured default position
    pub fn new(node: NodeId, options: DragOptions) -> Self {
        let translate = options.default_position;
        Self {
            node,
            options,
            state: DragState::Idle,
            translate,
            initial_anchor: Point::ZERO,
            previous_final: Point::ZERO,
            snap_cache: SnapCache::new(),
            saved_user_select: None,
        }
    }

    /// Prepare the element: touch hint, main class, initial placement.
    pub fn install<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        host.set_style(self.node, TOUCH_ACTION_PROPERTY, Some("none"));
        host.add_class(self.node, &self.options.classes.main);
        host.place(self.node, self.placement());
        debug!(node = %self.node, x = self.translate.x, y = self.translate.y, "draggable installed");
    }

    /// Undo `install`'s touch hint, aborting any drag in progress.
    pub fn uninstall<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if self.state.is_dragging() {
            warn!(node = %self.node, "detached mid-drag, ending drag");
            self.finish_drag(host);
        }
        host.set_style(self.node, TOUCH_ACTION_PROPERTY, None);
    }

    /// Replace the options wholesale.
    ///
    /// Offsets are untouched. Class names are swapped in place and the
    /// dragged flag survives the swap. Replacing options mid-drag takes
    /// effect on the next pointer event, with bounds and axis permissions
    /// still those resolved at drag start.
    pub fn update<H: DragHost + ?Sized>(
        &mut self,
        host: &mut H,
        options: DragOptions,
    ) -> DragResult<()> {
        options.validate()?;
        if options == self.options {
            return Ok(());
        }

        let node = self.node;
        let old = &self.options.classes;
        let was_dragged = host.has_class(node, &old.dragged);
        let was_dragging = host.has_class(node, &old.dragging);
        host.remove_class(node, &old.main);
        host.remove_class(node, &old.dragged);
        host.remove_class(node, &old.dragging);

        self.options = options;
        self.snap_cache.clear();

        let new = &self.options.classes;
        host.add_class(node, &new.main);
        if was_dragged {
            host.add_class(node, &new.dragged);
        }
        if was_dragging {
            host.add_class(node, &new.dragging);
        }
        debug!(node = %node, disabled = self.options.disabled, "options updated");
        Ok(())
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn initial_anchor(&self) -> Point {
        self.initial_anchor
    }

    pub fn previous_final(&self) -> Point {
        self.previous_final
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub(crate) fn placement(&self) -> Placement {
        Placement::new(self.translate, self.options.gpu_acceleration)
    }

    pub(crate) fn suppress_user_select<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if !self.options.apply_user_select_hack {
            return;
        }
        let body = host.body();
        self.saved_user_select = Some(host.style(body, USER_SELECT_PROPERTY));
        host.set_style(body, USER_SELECT_PROPERTY, Some("none"));
    }

    pub(crate) fn restore_user_select<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(previous) = self.saved_user_select.take() {
            let body = host.body();
            host.set_style(body, USER_SELECT_PROPERTY, previous.as_deref());
        }
    }

    /// Leave Dragging: classes, body style, drag-end event, anchors.
    pub(crate) fn finish_drag<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        let Some(active) = self.state.active().copied() else {
            return;
        };
        let node = self.node;
        host.remove_class(node, &self.options.classes.dragging);
        host.add_class(node, &self.options.classes.dragged);
        self.restore_user_select(host);
        host.dispatch_drag_event(node, DragEvent::End);

        // Each axis resets its own anchor.
        if active.can_move_x {
            self.initial_anchor.x = self.translate.x;
        }
        if active.can_move_y {
            self.initial_anchor.y = self.translate.y;
        }
        self.state.reset();
        debug!(node = %node, x = self.translate.x, y = self.translate.y, "drag ended");
    }
}

impl PointerListener for DragSession {
    fn handle_pointer(
        &mut self,
        host: &mut dyn DragHost,
        event: &mut PointerEvent,
    ) -> DragResult<()> {
        match event.phase() {
            PointerPhase::Down => self.pointer_down(host, &*event),
            PointerPhase::Move => self.pointer_move(host, event),
            PointerPhase::Up => {
                self.pointer_up(host);
                Ok(())
            }
        }
    }
}
