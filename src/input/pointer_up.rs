//! Pointer up handling - finalize the drag.

use crate::host::DragHost;
use crate::session::DragSession;

impl DragSession {
    /// Dragging -> Idle.
    ///
    /// Ignored while disabled, which leaves a drag frozen until re-enabled,
    /// and ignored while Idle: document-level releases that never started a
    /// drag on this element emit nothing.
    pub fn pointer_up<H>(&mut self, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        if self.options.disabled || self.state.is_idle() {
            return;
        }
        self.finish_drag(host);
    }
}
