//! Pointer move handling - turns pointer positions into a translation.
//!
//! ## Performance Notes
//!
//! Moves arrive at up to the display refresh rate. The handler exits early
//! when idle, snaps through a last-arguments cache, and defers the style
//! write to the microtask checkpoint instead of mutating layout inline.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::bounds::pointer_space;
use crate::error::DragResult;
use crate::events::{DragEvent, PointerEvent};
use crate::geometry::clamp_to_rect;
use crate::host::DragHost;
use crate::profile_scope;
use crate::session::DragSession;
use tracing::{trace, warn};

impl DragSession {
    /// Apply one pointer move while Dragging.
    ///
    /// Order: clamp into pointer-space bounds, snap the delta from the last
    /// accepted position, then update the allowed axes. A snapped delta of
    /// zero discards the move entirely. A grid error ends the drag before it
    /// is returned, so the session is never left half-dragging.
    pub fn pointer_move<H>(&mut self, host: &mut H, event: &mut PointerEvent) -> DragResult<()>
    where
        H: DragHost + ?Sized,
    {
        profile_scope!("pointer_move");

        if self.options.disabled {
            return Ok(());
        }
        let Some(active) = self.state.active().copied() else {
            return Ok(());
        };
        let Some(pointer) = event.position else {
            return Ok(());
        };

        event.prevent_default();

        let node = self.node;
        let mut candidate = pointer;

        if let Some(bounds) = active.bounds {
            // The element may have reflowed since drag start
            let node_rect = host.bounding_rect(node);
            let virtual_bounds = pointer_space(&bounds, active.client_to_node_offset, &node_rect);
            candidate = clamp_to_rect(candidate, &virtual_bounds);
        }

        if let Some(grid) = self.options.grid {
            let delta = candidate - self.previous_final;
            let snapped = match self.snap_cache.snap(grid, delta) {
                Ok(snapped) => snapped,
                Err(err) => {
                    warn!(node = %node, error = %err, "aborting drag");
                    self.finish_drag(host);
                    return Err(err);
                }
            };
            if snapped.x == 0.0 && snapped.y == 0.0 {
                trace!(node = %node, dx = delta.x, dy = delta.y, "move below grid step");
                return Ok(());
            }
            candidate = self.previous_final + snapped;
        }

        if active.can_move_x {
            self.translate.x = candidate.x - self.initial_anchor.x;
        }
        if active.can_move_y {
            self.translate.y = candidate.y - self.initial_anchor.y;
        }
        self.previous_final = candidate;

        host.add_class(node, &self.options.classes.dragging);
        host.dispatch_drag_event(node, DragEvent::drag(self.translate));
        host.schedule_placement(node, self.placement());

        trace!(node = %node, x = self.translate.x, y = self.translate.y, "drag move");
        Ok(())
    }
}
