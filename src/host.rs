//! Host seam - what the drag engine needs from an element tree.
//!
//! The engine never touches a concrete tree. It asks a `DragHost` to resolve
//! selectors, measure boxes, toggle classes, write styles, emit interaction
//! events and schedule visual placements. `dom::ElementTree` is the in-crate
//! implementation; a browser binding would be another.

use crate::error::DragResult;
use crate::events::DragEvent;
use crate::geometry::{Rect, Size};
use crate::placement::Placement;
use std::fmt;

/// Opaque handle to an element in a host tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

pub trait DragHost {
    /// First element in document order matching `selector`.
    /// `scope = Some(node)` searches only the descendants of `node`;
    /// `None` searches the whole document.
    fn query_selector(&self, scope: Option<NodeId>, selector: &str) -> DragResult<Option<NodeId>>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Inclusive: every node contains itself
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Current rendered box in viewport coordinates
    fn bounding_rect(&self, node: NodeId) -> Rect;

    fn viewport_size(&self) -> Size;

    fn body(&self) -> NodeId;

    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// `None` removes the property
    fn set_style(&mut self, node: NodeId, property: &str, value: Option<&str>);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Emit an interaction event on `node`. Listener callbacks may run after
    /// the caller returns.
    fn dispatch_drag_event(&mut self, node: NodeId, event: DragEvent);

    /// Write the placement immediately
    fn place(&mut self, node: NodeId, placement: Placement);

    /// Write the placement after the current event handling finishes
    fn schedule_placement(&mut self, node: NodeId, placement: Placement);
}
