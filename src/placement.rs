//! Visual placement of the dragged element.
//!
//! Moves write a `transform` rather than `left`/`top` so the element's layout
//! box never changes while dragging. Writes produced by pointer moves go
//! through `PlacementQueue` and land once the host runs its microtask
//! checkpoint, keeping style mutation out of the input handler.

use crate::geometry::Point;
use crate::host::NodeId;

/// Offset to render an element at, plus the technique to render it with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset: Point,
    pub gpu_acceleration: bool,
}

impl Placement {
    pub fn new(offset: Point, gpu_acceleration: bool) -> Self {
        Self {
            offset,
            gpu_acceleration,
        }
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        let Point { x, y } = self.offset;
        if self.gpu_acceleration {
            format!("translate3d({x}px, {y}px, 1px)")
        } else {
            format!("translate({x}px, {y}px)")
        }
    }
}

/// Pending placements in scheduling order.
///
/// Draining yields every write, so the last placement of a burst of moves is
/// always the one left on the element.
#[derive(Debug, Default)]
pub struct PlacementQueue {
    pending: Vec<(NodeId, Placement)>,
}

impl PlacementQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, node: NodeId, placement: Placement) {
        self.pending.push((node, placement));
    }

    pub fn drain(&mut self) -> Vec<(NodeId, Placement)> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
