//! Document model the drag behavior runs against.
//!
//! ## Modules
//!
//! - `selector` - CSS selector subset used by `handle`, `cancel` and bounds
//! - `tree` - element arena implementing `DragHost`
//!
//! `Document` owns a tree plus the document-level pointer listeners. Every
//! listener is registered individually and removed by its own id, so sessions
//! on different elements never share a registration.

mod selector;
mod tree;

pub use selector::{Selector, SelectorSubject};
pub use tree::{ElementSpec, ElementTree, EventListenerId};

use crate::error::DragResult;
use crate::events::{NativeEventType, PointerEvent};
use crate::geometry::{Point, Size};
use crate::host::{DragHost, NodeId};
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tracing::warn;

/// Receiver of document-level pointer events
pub trait PointerListener: Send {
    fn handle_pointer(&mut self, host: &mut dyn DragHost, event: &mut PointerEvent)
    -> DragResult<()>;
}

/// Listener shared between the document and whoever registered it
pub type SharedListener = Arc<Mutex<dyn PointerListener>>;

/// Handle for removing one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    event_type: NativeEventType,
    listener: SharedListener,
}

/// An element tree plus its document-level pointer listeners
pub struct Document {
    tree: ElementTree,
    registrations: Vec<Registration>,
    next_listener: u64,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            tree: ElementTree::new(Size::new(width, height)),
            registrations: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn add_pointer_listener(
        &mut self,
        event_type: NativeEventType,
        listener: SharedListener,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.registrations.push(Registration {
            id,
            event_type,
            listener,
        });
        id
    }

    pub fn remove_pointer_listener(&mut self, id: ListenerId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.registrations.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Deliver a pointer event to every listener registered for its type,
    /// in registration order.
    ///
    /// A failing listener does not stop delivery to the others; the first
    /// error is returned once every listener has run. Drag-event callbacks
    /// run after each listener's lock is released. Deferred placements stay
    /// pending; see `pointer`.
    pub fn dispatch(&mut self, mut event: PointerEvent) -> DragResult<PointerEvent> {
        let listeners: Vec<SharedListener> = self
            .registrations
            .iter()
            .filter(|r| r.event_type == event.event_type)
            .map(|r| Arc::clone(&r.listener))
            .collect();

        let mut first_error = None;
        for listener in listeners {
            let result = listener.lock().handle_pointer(&mut self.tree, &mut event);
            self.tree.deliver_drag_events();
            if let Err(err) = result {
                warn!(event = event.event_type.name(), error = %err, "pointer listener failed");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(event),
        }
    }

    /// Dispatch, then run the microtask checkpoint the way an event loop
    /// does once the handlers return.
    pub fn pointer(&mut self, event: PointerEvent) -> DragResult<PointerEvent> {
        let result = self.dispatch(event);
        self.tree.run_microtasks();
        result
    }

    /// Mouse event at a viewport point, targeted at the topmost element there
    pub fn mouse(&mut self, event_type: NativeEventType, at: Point) -> DragResult<PointerEvent> {
        let target = self.target_at(at);
        self.pointer(PointerEvent::mouse(event_type, at, target))
    }

    /// Touch event targeted at the element under the first contact
    pub fn touch(
        &mut self,
        event_type: NativeEventType,
        touches: &[Point],
    ) -> DragResult<PointerEvent> {
        let target = touches
            .first()
            .map_or_else(|| self.tree.body(), |first| self.target_at(*first));
        self.pointer(PointerEvent::touch(event_type, touches, target))
    }

    fn target_at(&self, at: Point) -> NodeId {
        self.tree.element_at(at).unwrap_or_else(|| self.tree.body())
    }
}

impl Deref for Document {
    type Target = ElementTree;

    fn deref(&self) -> &ElementTree {
        &self.tree
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }
}
