//! In-memory element tree.
//!
//! Elements are stored in an arena indexed by `NodeId`. Each has a layout box
//! in viewport coordinates; the rendered box additionally carries the
//! translations applied through placements on the element and its ancestors,
//! the same way a CSS transform shifts `getBoundingClientRect`.

use super::selector::{Selector, SelectorSubject};
use crate::constants::TRANSFORM_PROPERTY;
use crate::error::{DragError, DragResult};
use crate::events::{DragEvent, DragEventKind};
use crate::geometry::{Point, Rect, Size};
use crate::host::{DragHost, NodeId};
use crate::placement::{Placement, PlacementQueue};
use crate::spatial_index::SpatialIndex;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Description of an element to append
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub rect: Rect,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            rect: Rect::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Layout box as origin and size
    pub fn with_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::from_xywh(x, y, width, height);
        self
    }
}

#[derive(Debug)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    layout: Rect,
    translation: Point,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SelectorSubject for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

type DragListener = Box<dyn FnMut(&DragEvent) + Send>;

/// Handle for removing a drag-event listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventListenerId(u64);

struct EventListener {
    id: EventListenerId,
    kind: DragEventKind,
    callback: DragListener,
}

/// Arena-backed element tree rooted at `body`
pub struct ElementTree {
    elements: Vec<Element>,
    viewport: Size,
    index: SpatialIndex,
    listeners: HashMap<NodeId, Vec<EventListener>>,
    next_listener: u64,
    /// Events waiting for `deliver_drag_events`
    pending_events: Vec<(NodeId, DragEvent)>,
    /// `None` unless recording was switched on
    event_log: Option<Vec<(NodeId, DragEvent)>>,
    microtasks: PlacementQueue,
}

impl ElementTree {
    /// A tree containing only a `body` that fills the viewport
    pub fn new(viewport: Size) -> Self {
        let body = Element {
            tag: "body".to_string(),
            id: None,
            classes: Vec::new(),
            styles: BTreeMap::new(),
            layout: Rect::from_xywh(0.0, 0.0, viewport.width, viewport.height),
            translation: Point::ZERO,
            parent: None,
            children: Vec::new(),
        };
        let mut index = SpatialIndex::new();
        index.insert(NodeId(0), body.layout);
        Self {
            elements: vec![body],
            viewport,
            index,
            listeners: HashMap::new(),
            next_listener: 0,
            pending_events: Vec::new(),
            event_log: None,
            microtasks: PlacementQueue::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn exists(&self, node: NodeId) -> bool {
        node.0 < self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn append_child(&mut self, parent: NodeId, spec: ElementSpec) -> DragResult<NodeId> {
        if !self.exists(parent) {
            return Err(DragError::UnknownElement(parent));
        }
        let node = NodeId(self.elements.len());
        self.elements.push(Element {
            tag: spec.tag,
            id: spec.id,
            classes: spec.classes,
            styles: BTreeMap::new(),
            layout: spec.rect,
            translation: Point::ZERO,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.elements[parent.0].children.push(node);
        self.index.insert(node, self.bounding_rect(node));
        Ok(node)
    }

    /// Change an element's layout box, e.g. to simulate reflow
    pub fn set_layout(&mut self, node: NodeId, rect: Rect) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.layout = rect;
            self.reindex_subtree(node);
        }
    }

    /// Resize the viewport; the body keeps filling it
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        let root = self.root();
        self.set_layout(root, Rect::from_xywh(0.0, 0.0, viewport.width, viewport.height));
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.elements
            .get(node.0)
            .map(|e| e.classes.clone())
            .unwrap_or_default()
    }

    /// Offset currently rendered on the element
    pub fn translation(&self, node: NodeId) -> Point {
        self.elements
            .get(node.0)
            .map_or(Point::ZERO, |e| e.translation)
    }

    /// Topmost element under a viewport point: the deepest hit, latest
    /// created on ties.
    pub fn element_at(&self, point: Point) -> Option<NodeId> {
        self.index
            .query_point(point)
            .into_iter()
            .max_by_key(|node| (self.depth(*node), *node))
    }

    /// Listen for `kind` events on `node`.
    ///
    /// Callbacks run from `deliver_drag_events`, after the emitting session
    /// has been unlocked, so a callback may query its `Draggable`.
    pub fn add_event_listener<F>(
        &mut self,
        node: NodeId,
        kind: DragEventKind,
        listener: F,
    ) -> EventListenerId
    where
        F: FnMut(&DragEvent) + Send + 'static,
    {
        let id = EventListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.entry(node).or_default().push(EventListener {
            id,
            kind,
            callback: Box::new(listener),
        });
        id
    }

    pub fn remove_event_listener(&mut self, id: EventListenerId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(position) = listeners.iter().position(|l| l.id == id) {
                listeners.remove(position);
                return true;
            }
        }
        false
    }

    /// Run listener callbacks for every event emitted since the last call
    pub fn deliver_drag_events(&mut self) {
        for (node, event) in std::mem::take(&mut self.pending_events) {
            let Some(listeners) = self.listeners.get_mut(&node) else {
                continue;
            };
            for listener in listeners.iter_mut().filter(|l| l.kind == event.kind()) {
                (listener.callback)(&event);
            }
        }
    }

    /// Start or stop keeping a log of emitted events. Stopping drops the log.
    pub fn record_events(&mut self, enabled: bool) {
        self.event_log = enabled.then(Vec::new);
    }

    /// Every interaction event emitted while recording, in order
    pub fn event_log(&self) -> &[(NodeId, DragEvent)] {
        self.event_log.as_deref().unwrap_or_default()
    }

    pub fn events_for(&self, node: NodeId) -> Vec<DragEvent> {
        self.event_log()
            .iter()
            .filter(|(target, _)| *target == node)
            .map(|(_, event)| *event)
            .collect()
    }

    pub fn clear_event_log(&mut self) {
        if let Some(log) = self.event_log.as_mut() {
            log.clear();
        }
    }

    pub fn pending_microtasks(&self) -> usize {
        self.microtasks.len()
    }

    /// Apply every deferred placement, in scheduling order
    pub fn run_microtasks(&mut self) {
        for (node, placement) in self.microtasks.drain() {
            self.place(node, placement);
        }
    }

    fn depth(&self, node: NodeId) -> usize {
        self.ancestors(node).count()
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + Clone + '_ {
        std::iter::successors(self.parent(node), move |current| self.parent(*current))
    }

    fn reindex_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let rect = self.bounding_rect(current);
            self.index.insert(current, rect);
            stack.extend(self.elements[current.0].children.iter().copied());
        }
    }

    /// Pre-order walk of the descendants of `node`, excluding `node`
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.elements[node.0].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.elements[current.0].children.iter().rev().copied());
        }
        order
    }

    fn matches(&self, selector: &Selector, node: NodeId) -> bool {
        let ancestors = self
            .ancestors(node)
            .map(|ancestor| &self.elements[ancestor.0] as &dyn SelectorSubject);
        selector.matches(&self.elements[node.0], ancestors)
    }
}

impl DragHost for ElementTree {
    fn query_selector(&self, scope: Option<NodeId>, selector: &str) -> DragResult<Option<NodeId>> {
        let parsed = Selector::parse(selector)?;
        let candidates = match scope {
            Some(scope) if !self.exists(scope) => return Err(DragError::UnknownElement(scope)),
            Some(scope) => self.descendants(scope),
            None => {
                let root = self.root();
                std::iter::once(root).chain(self.descendants(root)).collect()
            }
        };
        Ok(candidates
            .into_iter()
            .find(|node| self.matches(&parsed, *node)))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements.get(node.0).and_then(|e| e.parent)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        let Some(element) = self.elements.get(node.0) else {
            return Rect::default();
        };
        let shift = self
            .ancestors(node)
            .fold(element.translation, |acc, a| acc + self.elements[a.0].translation);
        element.layout.translate(shift)
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn body(&self) -> NodeId {
        self.root()
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.elements
            .get(node.0)
            .and_then(|e| e.styles.get(property).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: Option<&str>) {
        let Some(element) = self.elements.get_mut(node.0) else {
            return;
        };
        match value {
            Some(value) => {
                element.styles.insert(property.to_string(), value.to_string());
            }
            None => {
                element.styles.remove(property);
            }
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elements
            .get(node.0)
            .is_some_and(|e| SelectorSubject::has_class(e, class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.classes.retain(|c| c != class);
        }
    }

    fn dispatch_drag_event(&mut self, node: NodeId, event: DragEvent) {
        trace!(node = %node, event = event.name(), "dispatch drag event");
        if let Some(log) = self.event_log.as_mut() {
            log.push((node, event));
        }
        let listening = self
            .listeners
            .get(&node)
            .is_some_and(|listeners| listeners.iter().any(|l| l.kind == event.kind()));
        if listening {
            self.pending_events.push((node, event));
        }
    }

    fn place(&mut self, node: NodeId, placement: Placement) {
        let css = placement.to_css();
        let Some(element) = self.elements.get_mut(node.0) else {
            return;
        };
        element.translation = placement.offset;
        element.styles.insert(TRANSFORM_PROPERTY.to_string(), css);
        self.reindex_subtree(node);
    }

    fn schedule_placement(&mut self, node: NodeId, placement: Placement) {
        self.microtasks.schedule(node, placement);
    }
}
