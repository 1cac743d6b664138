//! The scene: owner of the live node collection, the viewport and the stage.
//!
//! Every mutation of the viewport goes through [`Scene::pan`] or
//! [`Scene::zoom_at`], which re-render all member nodes. Nodes never hold a
//! reference back to the scene; they receive the viewport explicitly on every
//! render and drag step.

use crate::constants::{DEFAULT_TEXT_BODY, DEFAULT_TEXT_FONT_SIZE, DEFAULT_TEXT_WIDTH};
use crate::error::CanvasResult;
use crate::input::InputState;
use crate::layout::SceneSnapshot;
use crate::media::{MediaEvent, MediaLoader};
use crate::node::Node;
use crate::profile_scope;
use crate::settings::Settings;
use crate::spatial_index::SpatialIndex;
use crate::stage::Stage;
use crate::types::{Bounds, ContentDescriptor, ContentType, Depth, NodeId, NodeRecord};
use crate::vector::Vector;
use crate::viewport::Viewport;
use tracing::{debug, info};

/// One-way notifications for the surrounding application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// A directory node was activated
    ChangeDirectory(String),
    /// Nodes were added, moved or removed; the layout may be persisted
    LayoutChanged,
}

pub struct Scene {
    pub(crate) viewport: Viewport,
    pub(crate) children: Vec<Node>,
    pub(crate) stage: Stage,
    pub(crate) settings: Settings,
    pub(crate) input_state: InputState,
    pub(crate) index: SpatialIndex,
    next_id: u64,
    events: Vec<SceneEvent>,
}

impl Scene {
    pub fn new(settings: Settings, stage_bounds: Bounds) -> Self {
        let stage = Stage::new(stage_bounds, settings.stage);
        Self {
            viewport: Viewport::default(),
            children: Vec::new(),
            stage,
            settings,
            input_state: InputState::default(),
            index: SpatialIndex::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Fill the stage tray with templates. Called once at session start.
    pub fn populate_stage(&mut self, records: &[NodeRecord]) -> CanvasResult<()> {
        for record in records {
            let id = self.alloc_id();
            self.stage.insert_template(id, record)?;
        }
        debug!(count = records.len(), "stage populated");
        Ok(())
    }

    pub(crate) fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Scene nodes in insertion order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find(|n| n.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.children.iter_mut().find(|n| n.id() == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Drain pending notifications for the host.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Build a node from an external record and insert it into the scene.
    pub fn add_record(&mut self, record: &NodeRecord) -> CanvasResult<NodeId> {
        let id = self.alloc_id();
        let node = Node::from_record(id, record)?;
        self.add_node(node);
        Ok(id)
    }

    pub(crate) fn add_node(&mut self, mut node: Node) {
        node.render(&self.viewport);
        self.index.insert(node.id(), node.position(), node.hit_size());
        self.children.push(node);
    }

    /// Remove a node from the scene and from input routing. Removing a node
    /// that is already gone is a no-op.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.children.iter().position(|n| n.id() == id)?;
        let node = self.children.remove(idx);
        self.index.remove(id);
        if self.input_state.dragged_node() == Some(id) {
            self.input_state.reset();
        }
        debug!(node = %id, "node removed");
        Some(node)
    }

    /// Remove a node and announce the layout change.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        if self.remove_node(id).is_some() {
            self.emit(SceneEvent::LayoutChanged);
            true
        } else {
            false
        }
    }

    /// Spawn an editable text node with its top-left corner at a viewport
    /// point, sized to a fixed on-screen footprint at the current zoom.
    pub fn spawn_text(&mut self, at: Vector) -> NodeId {
        let scale = self.viewport.scale();
        let id = self.alloc_id();
        let node = Node::new(
            id,
            ContentDescriptor::new(ContentType::Text, DEFAULT_TEXT_BODY),
            self.viewport.to_absolute(at),
            (DEFAULT_TEXT_WIDTH / scale, DEFAULT_TEXT_FONT_SIZE / scale),
            Depth::SceneItem,
        );
        self.add_node(node);
        self.emit(SceneEvent::LayoutChanged);
        id
    }

    /// Edit the body of a text node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        let viewport = self.viewport;
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        if !node.set_text(text) {
            return false;
        }
        node.render(&viewport);
        self.emit(SceneEvent::LayoutChanged);
        true
    }

    /// Report the rendered box of a node, in viewport pixels, so hit testing
    /// covers all of it. Text and directory nodes need this once their
    /// content is laid out; without it only a `width` x font-size strip is
    /// pressable.
    pub fn set_measured_size(&mut self, id: NodeId, width_px: f64, height_px: f64) -> bool {
        let scale = self.viewport.scale();
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        if !node.set_measured_size(width_px, height_px, scale) {
            return false;
        }
        let (position, size) = (node.position(), node.hit_size());
        self.index.insert(id, position, size);
        true
    }

    /// Resize a node to the canonical footprint at the current zoom.
    pub fn fit_to_footprint(&mut self, id: NodeId) -> bool {
        let viewport = self.viewport;
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        let before = node.size();
        node.fit_to_footprint(viewport.scale());
        node.render(&viewport);
        let (position, size) = (node.position(), node.hit_size());
        let resized = node.size() != before;
        self.index.insert(id, position, size);
        if resized {
            self.emit(SceneEvent::LayoutChanged);
        }
        true
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Recompute on-screen geometry for every scene node.
    pub fn render(&mut self) {
        profile_scope!("scene_render");
        let viewport = self.viewport;
        for child in &mut self.children {
            child.render(&viewport);
        }
    }

    /// Pan by a raw viewport-pixel delta and re-render. Returns `false` for
    /// non-finite deltas, which leave the viewport untouched.
    pub fn pan(&mut self, delta: Vector) -> bool {
        if !self.viewport.pan(delta) {
            return false;
        }
        self.render();
        true
    }

    /// Zoom around a viewport point and re-render. Returns `true` if the
    /// scale changed.
    pub fn zoom_at(&mut self, pointer: Vector, factor: f64) -> bool {
        if !self.viewport.zoom_at(pointer, factor) {
            return false;
        }
        self.render();
        true
    }

    // ========================================================================
    // Hit Testing
    // ========================================================================

    /// Topmost scene node under a viewport point: highest depth wins, later
    /// insertion breaks ties.
    pub fn node_at(&self, point: Vector) -> Option<NodeId> {
        let absolute = self.viewport.to_absolute(point);
        let candidates = self.index.query_point(absolute);
        if candidates.is_empty() {
            return None;
        }

        self.children
            .iter()
            .enumerate()
            .filter(|(_, n)| candidates.contains(&n.id()))
            .max_by_key(|(i, n)| (n.depth(), *i))
            .map(|(_, n)| n.id())
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// Ask the loader to probe every scene node and stage template with
    /// probeable media. Returns the number of requests started.
    pub fn request_media(&self, loader: &MediaLoader) -> usize {
        self.children
            .iter()
            .chain(self.stage.children())
            .filter(|n| loader.request(n.id(), n.descriptor()))
            .count()
    }

    /// Apply a finished media probe. Only the aspect ratio changes; geometry
    /// picks it up lazily on the next render or stage layout.
    pub fn apply_media_event(&mut self, event: MediaEvent) -> bool {
        let MediaEvent::Loaded { node, aspect_ratio } = event else {
            return false;
        };

        if let Some(n) = self.get_mut(node) {
            return n.set_aspect_ratio(aspect_ratio);
        }
        let applied = self
            .stage
            .get_mut(node)
            .is_some_and(|n| n.set_aspect_ratio(aspect_ratio));
        if applied {
            self.stage.layout_children();
        }
        applied
    }

    /// Drain the loader and apply everything that has completed so far.
    pub fn apply_media_events(&mut self, loader: &MediaLoader) -> usize {
        let mut applied = 0;
        for event in loader.drain() {
            if self.apply_media_event(event) {
                applied += 1;
            }
        }
        applied
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    pub fn serialize(&self) -> SceneSnapshot {
        SceneSnapshot {
            origin: self.viewport.origin(),
            scale: self.viewport.scale(),
            children: self.children.iter().map(Node::serialize).collect(),
        }
    }

    /// Replace the viewport and scene nodes with a saved snapshot. The stage
    /// is left as is.
    pub fn restore(&mut self, snapshot: &SceneSnapshot) -> CanvasResult<()> {
        let mut nodes = Vec::with_capacity(snapshot.children.len());
        for record in &snapshot.children {
            let id = self.alloc_id();
            nodes.push(Node::from_record(id, record)?);
        }

        self.input_state.reset();
        self.viewport = Viewport::new(snapshot.origin, snapshot.scale);
        self.children = nodes;
        self.index.rebuild(
            self.children
                .iter()
                .map(|n| (n.id(), n.position(), n.hit_size())),
        );
        self.render();
        info!(nodes = self.children.len(), scale = self.viewport.scale(), "scene restored");
        Ok(())
    }
}
