//! Spatial Index Module
//!
//! R-tree over scene node rectangles in absolute coordinates. Absolute
//! rectangles do not change under pan/zoom, so the index only needs updating
//! when nodes are added, removed, moved or resized.

use crate::types::NodeId;
use crate::vector::Vector;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's bounding box in absolute coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, position: Vector, size: (f64, f64)) -> Self {
        Self {
            node_id,
            min: [position.x, position.y],
            max: [position.x + size.0, position.y + size.1],
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Vector) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `node_id`.
    pub fn insert(&mut self, node_id: NodeId, position: Vector, size: (f64, f64)) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All nodes whose rectangle contains the absolute point.
    pub fn query_point(&self, p: Vector) -> Vec<NodeId> {
        let envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (NodeId, Vector, (f64, f64))>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        self.entries = entries.iter().map(|e| (e.node_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}
