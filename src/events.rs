//! Pointer input and drag interaction events.

use crate::geometry::Point;
use crate::host::NodeId;
use serde::Serialize;

/// Native input event types the attachment shell listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeEventType {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

/// Lifecycle step a native event maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl NativeEventType {
    pub const ALL: [NativeEventType; 6] = [
        NativeEventType::TouchStart,
        NativeEventType::TouchEnd,
        NativeEventType::TouchMove,
        NativeEventType::MouseDown,
        NativeEventType::MouseUp,
        NativeEventType::MouseMove,
    ];

    pub fn phase(self) -> PointerPhase {
        match self {
            Self::MouseDown | Self::TouchStart => PointerPhase::Down,
            Self::MouseMove | Self::TouchMove => PointerPhase::Move,
            Self::MouseUp | Self::TouchEnd => PointerPhase::Up,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
        }
    }
}

/// A pointer or touch event as delivered to document-level listeners
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub event_type: NativeEventType,
    /// Client position of the primary contact. Touch events without any
    /// remaining contact carry none.
    pub position: Option<Point>,
    /// Element the event originated on
    pub target: NodeId,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn mouse(event_type: NativeEventType, position: Point, target: NodeId) -> Self {
        Self {
            event_type,
            position: Some(position),
            target,
            default_prevented: false,
        }
    }

    /// Only the first contact is tracked
    pub fn touch(event_type: NativeEventType, touches: &[Point], target: NodeId) -> Self {
        Self {
            event_type,
            position: touches.first().copied(),
            target,
            default_prevented: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.event_type.phase()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Kind of interaction event, used to register listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    Start,
    Drag,
    End,
}

impl DragEventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "drag-start",
            Self::Drag => "drag",
            Self::End => "drag-end",
        }
    }
}

/// Interaction event emitted on the dragged element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DragEvent {
    #[serde(rename = "drag-start")]
    Start,
    #[serde(rename = "drag")]
    Drag {
        #[serde(rename = "offsetX")]
        offset_x: f64,
        #[serde(rename = "offsetY")]
        offset_y: f64,
    },
    #[serde(rename = "drag-end")]
    End,
}

impl DragEvent {
    pub fn drag(offset: Point) -> Self {
        DragEvent::Drag {
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    pub fn kind(&self) -> DragEventKind {
        match self {
            DragEvent::Start => DragEventKind::Start,
            DragEvent::Drag { .. } => DragEventKind::Drag,
            DragEvent::End => DragEventKind::End,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Payload of a `drag` event
    pub fn offset(&self) -> Option<Point> {
        match self {
            DragEvent::Drag { offset_x, offset_y } => Some(Point::new(*offset_x, *offset_y)),
            _ => None,
        }
    }
}
