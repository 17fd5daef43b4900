//! Drag target resolution - which descendant starts a drag and which one
//! suppresses it.

use crate::error::{DragError, DragResult};
use crate::host::{DragHost, NodeId};

/// The element a pointer-down must land in. `None` means the node itself.
pub fn resolve_drag_handle<H>(host: &H, handle: Option<&str>, node: NodeId) -> DragResult<NodeId>
where
    H: DragHost + ?Sized,
{
    let Some(selector) = handle else {
        return Ok(node);
    };
    host.query_selector(Some(node), selector)?
        .ok_or_else(|| DragError::HandleNotFound(selector.to_string()))
}

/// The element inside which a pointer-down is ignored, if configured
pub fn resolve_cancel_zone<H>(
    host: &H,
    cancel: Option<&str>,
    node: NodeId,
) -> DragResult<Option<NodeId>>
where
    H: DragHost + ?Sized,
{
    let Some(selector) = cancel else {
        return Ok(None);
    };
    host.query_selector(Some(node), selector)?
        .map(Some)
        .ok_or_else(|| DragError::CancelNotFound(selector.to_string()))
}

/// Resolved handle and cancel zone for one drag attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTargets {
    pub handle: NodeId,
    pub cancel: Option<NodeId>,
}

impl DragTargets {
    /// Resolve both selectors and check they can coexist
    pub fn resolve<H>(
        host: &H,
        handle: Option<&str>,
        cancel: Option<&str>,
        node: NodeId,
    ) -> DragResult<Self>
    where
        H: DragHost + ?Sized,
    {
        if let (Some(handle), Some(cancel)) = (handle, cancel) {
            if handle == cancel {
                return Err(DragError::ConflictingSelectors {
                    selector: handle.to_string(),
                });
            }
        }
        let targets = Self {
            handle: resolve_drag_handle(host, handle, node)?,
            cancel: resolve_cancel_zone(host, cancel, node)?,
        };
        if let Some(cancel) = targets.cancel {
            if host.contains(cancel, targets.handle) {
                return Err(DragError::NestedCancel);
            }
        }
        Ok(targets)
    }

    /// Inside the handle and outside the cancel zone
    pub fn accepts<H>(&self, host: &H, origin: NodeId) -> bool
    where
        H: DragHost + ?Sized,
    {
        host.contains(self.handle, origin)
            && !self.cancel.is_some_and(|cancel| host.contains(cancel, origin))
    }
}
