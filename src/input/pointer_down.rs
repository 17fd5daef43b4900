//! Pointer down handling - target checks and drag initiation.
//!
//! Handle and cancel selectors are resolved on every press rather than at
//! attach time, so handles rendered after attach are picked up.

use crate::bounds::resolve_bounds;
use crate::error::DragResult;
use crate::events::{DragEvent, PointerEvent};
use crate::geometry::Point;
use crate::host::DragHost;
use crate::input::ActiveDrag;
use crate::profile_scope;
use crate::session::DragSession;
use crate::target::DragTargets;
use tracing::{debug, trace};

impl DragSession {
    /// Idle -> Dragging when the press lands on the draggable surface.
    ///
    /// Configuration errors propagate and leave the session Idle.
    pub fn pointer_down<H>(&mut self, host: &mut H, event: &PointerEvent) -> DragResult<()>
    where
        H: DragHost + ?Sized,
    {
        profile_scope!("pointer_down");

        if self.options.disabled || self.state.is_dragging() {
            return Ok(());
        }

        let node = self.node;
        let targets = DragTargets::resolve(
            &*host,
            self.options.handle.as_deref(),
            self.options.cancel.as_deref(),
            node,
        )?;

        let can_move_x = self.options.axis.allows_x();
        let can_move_y = self.options.axis.allows_y();

        let bounds = self
            .options
            .bounds
            .as_ref()
            .map(|bounds| resolve_bounds(&*host, bounds, node))
            .transpose()?;

        let node_rect = host.bounding_rect(node);

        if !targets.accepts(&*host, event.target) {
            trace!(node = %node, target = %event.target, "press outside draggable surface");
            return Ok(());
        }
        let Some(pointer) = event.position else {
            return Ok(());
        };

        self.suppress_user_select(host);
        host.dispatch_drag_event(node, DragEvent::Start);

        if can_move_x {
            self.initial_anchor.x = pointer.x - self.translate.x;
        }
        if can_move_y {
            self.initial_anchor.y = pointer.y - self.translate.y;
        }
        // Grid steps are counted from the press point.
        self.previous_final = pointer;

        let client_to_node_offset = if bounds.is_some() {
            pointer - node_rect.top_left()
        } else {
            Point::ZERO
        };

        self.state.start(ActiveDrag {
            can_move_x,
            can_move_y,
            bounds,
            client_to_node_offset,
        });
        debug!(node = %node, x = pointer.x, y = pointer.y, ?bounds, "drag started");
        Ok(())
    }
}
