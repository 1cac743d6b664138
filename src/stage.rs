//! The stage: a fixed tray of template nodes.
//!
//! The stage lives in screen space and ignores scene pan/zoom. Its templates
//! are never moved by a drag; pressing on one spawns a clone into the scene.
//! Membership only changes when a dragged scene node is dropped onto the tray,
//! which the scene carries out through the crate-private methods below.

use crate::error::CanvasResult;
use crate::node::Node;
use crate::settings::StageSettings;
use crate::types::{Bounds, Depth, NodeId, NodeRecord};
use crate::vector::Vector;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct Stage {
    bounds: Bounds,
    layout: StageSettings,
    children: Vec<Node>,
}

impl Stage {
    pub fn new(bounds: Bounds, layout: StageSettings) -> Self {
        Self {
            bounds,
            layout,
            children: Vec::new(),
        }
    }

    /// Screen bounding box of the tray
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move or resize the tray, e.g. after the host window resized.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.layout_children();
    }

    /// Whether a viewport point lies strictly inside the tray.
    pub fn contains(&self, point: Vector) -> bool {
        self.bounds.contains(point)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find(|n| n.id() == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Template under a viewport point, topmost first.
    pub fn template_at(&self, point: Vector) -> Option<&Node> {
        if !self.contains(point) {
            return None;
        }
        self.children
            .iter()
            .rev()
            .find(|n| n.view().bounds().contains_inclusive(point))
    }

    /// Populate the tray with a template at session start.
    pub(crate) fn insert_template(&mut self, id: NodeId, record: &NodeRecord) -> CanvasResult<()> {
        let mut node = Node::from_record(id, &record.clone().with_depth(Depth::StageItem))?;
        node.enter_stage();
        self.children.push(node);
        self.layout_children();
        Ok(())
    }

    /// Accept a node dropped onto the tray.
    pub(crate) fn accept(&mut self, mut node: Node) {
        node.enter_stage();
        debug!(node = %node.id(), "node moved to stage");
        self.children.push(node);
        self.layout_children();
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.children.iter_mut().find(|n| n.id() == id)
    }

    /// Stack templates in a column at a fixed on-screen width, each as tall
    /// as its aspect ratio requires.
    pub(crate) fn layout_children(&mut self) {
        let left = self.bounds.left + self.layout.padding;
        let mut top = self.bounds.top + self.layout.padding;
        let width = self.layout.item_width;

        for child in &mut self.children {
            let height = width / child.aspect_ratio();
            child.render_in_stage(Bounds::new(left, top, width, height));
            top += height + self.layout.gap;
        }
    }
}
