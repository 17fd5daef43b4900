//! Bounds resolution - turns a `Bounds` option into a viewport rectangle.
//!
//! Resolved fresh at every drag start; layout may have changed since the
//! previous drag. The region is not checked against the dragged element's own
//! size, so a region smaller than the element pins it to the region's
//! bottom-right edge.

use crate::error::{DragError, DragResult};
use crate::geometry::{Point, Rect};
use crate::host::{DragHost, NodeId};
use crate::options::{Bounds, BoundsInsets};

pub fn resolve_bounds<H>(host: &H, bounds: &Bounds, node: NodeId) -> DragResult<Rect>
where
    H: DragHost + ?Sized,
{
    match bounds {
        Bounds::Insets(insets) => Ok(inset_viewport(host, insets)),
        Bounds::Parent => {
            let parent = host.parent(node).ok_or(DragError::MissingParent(node))?;
            Ok(host.bounding_rect(parent))
        }
        Bounds::Selector(selector) => {
            let container = host
                .query_selector(None, selector)?
                .ok_or_else(|| DragError::BoundsSelectorNotFound(selector.clone()))?;
            Ok(host.bounding_rect(container))
        }
    }
}

/// `right` and `bottom` are measured inward from the far viewport edges
fn inset_viewport<H: DragHost + ?Sized>(host: &H, insets: &BoundsInsets) -> Rect {
    let viewport = host.viewport_size();
    Rect::new(
        insets.left,
        insets.top,
        viewport.width - insets.right,
        viewport.height - insets.bottom,
    )
}

/// Move a bounds rectangle into pointer space.
///
/// The pointer sits `grab` pixels inside the element's top-left corner, so
/// the element stays inside `bounds` exactly when the pointer stays inside
/// the returned rectangle.
pub fn pointer_space(bounds: &Rect, grab: Point, node_rect: &Rect) -> Rect {
    Rect::new(
        bounds.left + grab.x,
        bounds.top + grab.y,
        bounds.right + grab.x - node_rect.width(),
        bounds.bottom + grab.y - node_rect.height(),
    )
}
