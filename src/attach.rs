//! Attachment shell - binds a drag session to an element of a `Document`.
//!
//! ```ignore
//! let mut doc = Document::new(1000.0, 800.0);
//! let card = doc.append_child(doc.root(), ElementSpec::new("div").with_rect(0.0, 0.0, 100.0, 100.0))?;
//! let mut drag = attach(&mut doc, card, DragOptions::new().with_bounds("parent"))?;
//! doc.mouse(NativeEventType::MouseDown, Point::new(10.0, 10.0))?;
//! // ...
//! drag.detach(&mut doc);
//! ```

use crate::dom::{Document, ListenerId, SharedListener};
use crate::error::{DragError, DragResult};
use crate::events::NativeEventType;
use crate::geometry::Point;
use crate::host::NodeId;
use crate::options::DragOptions;
use crate::session::DragSession;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Handle to an attached drag behavior
pub struct Draggable {
    node: NodeId,
    session: Arc<Mutex<DragSession>>,
    listeners: Vec<ListenerId>,
}

/// Make `node` draggable.
///
/// Fails before any listener is registered when the options are invalid
/// (e.g. identical `handle` and `cancel`) or the element is unknown.
pub fn attach(document: &mut Document, node: NodeId, options: DragOptions) -> DragResult<Draggable> {
    options.validate()?;
    if !document.exists(node) {
        return Err(DragError::UnknownElement(node));
    }

    let mut session = DragSession::new(node, options);
    session.install(document.tree_mut());
    let session = Arc::new(Mutex::new(session));

    let listeners = NativeEventType::ALL
        .iter()
        .map(|event_type| {
            let listener: SharedListener = session.clone();
            document.add_pointer_listener(*event_type, listener)
        })
        .collect();

    debug!(node = %node, "attached");
    Ok(Draggable {
        node,
        session,
        listeners,
    })
}

impl Draggable {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Replace the options. Repeating the same options changes nothing.
    pub fn update(&self, document: &mut Document, options: DragOptions) -> DragResult<()> {
        if !self.is_attached() {
            return Err(DragError::Detached(self.node));
        }
        self.session.lock().update(document.tree_mut(), options)
    }

    /// Remove this session's listeners. A drag in progress is ended first,
    /// emitting its `drag-end`. Calling again is a no-op.
    pub fn detach(&mut self, document: &mut Document) {
        if self.listeners.is_empty() {
            return;
        }
        for id in self.listeners.drain(..) {
            document.remove_pointer_listener(id);
        }
        self.session.lock().uninstall(document.tree_mut());
        document.deliver_drag_events();
        debug!(node = %self.node, "detached");
    }

    pub fn translate(&self) -> Point {
        self.session.lock().translate()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.lock().is_dragging()
    }

    pub fn options(&self) -> DragOptions {
        self.session.lock().options().clone()
    }

    /// Run `f` against the session state, e.g. to inspect anchors
    pub fn with_session<R>(&self, f: impl FnOnce(&DragSession) -> R) -> R {
        f(&self.session.lock())
    }
}
