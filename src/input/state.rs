//! Drag state machine - Idle or Dragging, nothing in between.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down inside the handle, outside the cancel zone)
//! Dragging -> Idle    (pointer up, failed move, or detach)
//! ```
//!
//! Everything that is only meaningful during a drag lives in `ActiveDrag`,
//! so stale bounds or grab offsets from a previous drag cannot leak into the
//! next one.

use crate::geometry::{Point, Rect};

/// Facts captured at drag start, valid until the drag ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub can_move_x: bool,
    pub can_move_y: bool,
    /// Resolved bounds in viewport coordinates, if bounds are configured
    pub bounds: Option<Rect>,
    /// Pointer position relative to the node's top-left at drag start
    pub client_to_node_offset: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,
    /// Between a qualifying pointer-down and its pointer-up
    Dragging(ActiveDrag),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Active drag facts, if dragging
    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Dragging(active) => Some(active),
            Self::Idle => None,
        }
    }

    pub fn start(&mut self, active: ActiveDrag) {
        *self = Self::Dragging(active);
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
