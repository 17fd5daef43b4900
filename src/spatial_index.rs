//! Spatial Index Module
//!
//! R-tree over rendered element boxes, used to find the element under a
//! pointer. Boxes include translations, so an element being dragged is found
//! where it is drawn rather than where layout put it.

use crate::geometry::{Point, Rect};
use crate::host::NodeId;
use rstar::RTree;
use rstar::primitives::{GeomWithData, Rectangle};
use std::collections::HashMap;

type BoxEntry = GeomWithData<Rectangle<[f64; 2]>, NodeId>;

fn entry(node: NodeId, rect: Rect) -> BoxEntry {
    let corners = Rectangle::from_corners([rect.left, rect.top], [rect.right, rect.bottom]);
    GeomWithData::new(corners, node)
}

/// Element boxes keyed by node, queryable by point
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<BoxEntry>,
    boxes: HashMap<NodeId, Rect>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the box for `node`
    pub fn insert(&mut self, node: NodeId, rect: Rect) {
        if let Some(previous) = self.boxes.insert(node, rect) {
            self.tree.remove(&entry(node, previous));
        }
        self.tree.insert(entry(node, rect));
    }

    /// Every node whose box contains `point`, edges included, unordered
    pub fn query_point(&self, point: Point) -> Vec<NodeId> {
        self.tree
            .locate_all_at_point(&[point.x, point.y])
            .map(|hit| hit.data)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
