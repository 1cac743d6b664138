//! Canvas nodes and their drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! AtRestInScene  -> DraggingInScene   (pointer down on the node)
//! DraggingInScene -> AtRestInScene    (pointer up outside the stage)
//! DraggingInScene -> AtRestInStage    (pointer up inside the stage)
//! AtRestInStage  -> (unchanged)       (pointer down spawns a dragging clone)
//! ```
//!
//! A node never reaches another node or its owning container. Moving between
//! the scene and the stage is carried out by [`Scene`](crate::scene::Scene);
//! the node only updates its own flags, depth and geometry.

use crate::constants::{DEFAULT_ASPECT_RATIO, NODE_FOOTPRINT, PDF_ASPECT_RATIO};
use crate::error::CanvasResult;
use crate::types::{Bounds, ContentDescriptor, ContentType, Depth, NodeId, NodeRecord, ViewGeometry};
use crate::vector::Vector;
use crate::viewport::Viewport;
use tracing::debug;

/// Observable interaction state of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    AtRestInScene,
    DraggingInScene,
    AtRestInStage,
}

/// Transient drag bookkeeping, present only while the node is dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeDrag {
    /// Pointer position of the previous drag event, in viewport pixels
    pub last_pointer: Vector,
}

/// A positioned, sized, depth-ordered piece of content.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    descriptor: ContentDescriptor,
    /// Top-left corner in absolute coordinates
    position: Vector,
    /// Width in absolute units
    width: f64,
    /// Height in absolute units (font size for text-like nodes)
    height: f64,
    depth: Depth,
    aspect_ratio: f64,
    in_stage: bool,
    drag: Option<NodeDrag>,
    /// Host-measured extent in absolute units, for content whose rendered
    /// box is not `width` x `height` (wrapped text, padded labels)
    measured: Option<(f64, f64)>,
    view: ViewGeometry,
}

impl Node {
    pub fn new(
        id: NodeId,
        descriptor: ContentDescriptor,
        position: Vector,
        size: (f64, f64),
        depth: Depth,
    ) -> Self {
        let aspect_ratio = match descriptor.content_type {
            ContentType::Pdf => PDF_ASPECT_RATIO,
            _ => DEFAULT_ASPECT_RATIO,
        };

        Self {
            id,
            descriptor,
            position,
            width: size.0,
            height: size.1,
            depth,
            aspect_ratio,
            in_stage: false,
            drag: None,
            measured: None,
            view: ViewGeometry::default(),
        }
    }

    /// Rebuild a node from an external content record.
    pub fn from_record(id: NodeId, record: &NodeRecord) -> CanvasResult<Self> {
        let depth = Depth::try_from(record.z)?;
        Ok(Self::new(
            id,
            record.descriptor(),
            Vector::new(record.x, record.y),
            (record.w, record.h),
            depth,
        ))
    }

    /// Export the node as a content record. Inverse of [`Node::from_record`].
    pub fn serialize(&self) -> NodeRecord {
        NodeRecord {
            x: self.position.x,
            y: self.position.y,
            z: self.depth.z_index(),
            w: self.width,
            h: self.height,
            content_type: self.descriptor.content_type,
            path: self.descriptor.path.clone(),
            absolute: self.descriptor.absolute.clone(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn descriptor(&self) -> &ContentDescriptor {
        &self.descriptor
    }

    pub fn content_type(&self) -> ContentType {
        self.descriptor.content_type
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Extent used for hit testing: the host-measured box when one was
    /// reported, otherwise the node size.
    pub fn hit_size(&self) -> (f64, f64) {
        self.measured.unwrap_or((self.width, self.height))
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn in_stage(&self) -> bool {
        self.in_stage
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<NodeDrag> {
        self.drag
    }

    /// On-screen geometry as of the last render.
    pub fn view(&self) -> &ViewGeometry {
        &self.view
    }

    pub fn state(&self) -> NodeState {
        match (self.in_stage, self.drag.is_some()) {
            (true, _) => NodeState::AtRestInStage,
            (false, true) => NodeState::DraggingInScene,
            (false, false) => NodeState::AtRestInScene,
        }
    }

    /// Refine the aspect ratio once media has loaded. Degenerate ratios are
    /// ignored so sizing never divides by zero.
    pub fn set_aspect_ratio(&mut self, ratio: f64) -> bool {
        if !ratio.is_finite() || ratio <= 0.0 {
            return false;
        }
        self.aspect_ratio = ratio;
        true
    }

    /// Replace the body of a text node. Other content types are immutable.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if self.descriptor.content_type != ContentType::Text {
            return false;
        }
        self.descriptor.path = text.into();
        true
    }

    /// Record the rendered box the host measured, in viewport pixels at
    /// `scale`. Text and directory nodes store a font size as their height,
    /// so their real box is only known after layout.
    pub fn set_measured_size(&mut self, width_px: f64, height_px: f64, scale: f64) -> bool {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width_px) || !valid(height_px) || !valid(scale) {
            return false;
        }
        self.measured = Some((width_px / scale, height_px / scale));
        true
    }

    /// Resize to the canonical footprint: the dominant axis spans
    /// `NODE_FOOTPRINT` pixels at `scale`, the other follows the aspect ratio.
    /// Any measured box is dropped until the host measures again.
    pub fn fit_to_footprint(&mut self, scale: f64) {
        self.measured = None;
        let extent = NODE_FOOTPRINT / scale;
        if self.aspect_ratio > 1.0 {
            self.width = extent;
            self.height = extent / self.aspect_ratio;
        } else {
            self.height = extent;
            self.width = extent * self.aspect_ratio;
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Recompute on-screen geometry from the absolute state.
    ///
    /// While dragging, the on-screen position is authoritative and the
    /// absolute position is re-derived from it instead.
    pub fn render(&mut self, viewport: &Viewport) {
        let scale = viewport.scale();

        if self.drag.is_some() {
            self.position = viewport.to_absolute(self.view.top_left());
        } else {
            let pos = viewport.to_viewport(self.position);
            self.view.left = pos.x;
            self.view.top = pos.y;
        }

        self.view.width = self.width * scale;
        self.view.height = self.height * scale;
        self.view.font_size = self
            .descriptor
            .content_type
            .is_text_like()
            .then_some(self.height * scale);
        self.view.z_index = self.depth.z_index();
    }

    /// Place the node into a stage slot. Stage geometry ignores pan/zoom.
    pub(crate) fn render_in_stage(&mut self, slot: Bounds) {
        self.view.left = slot.left;
        self.view.top = slot.top;
        self.view.width = slot.width;
        self.view.height = slot.height;
        self.view.font_size = self.descriptor.content_type.is_text_like().then_some(slot.height);
        self.view.z_index = self.depth.z_index();
    }

    // ========================================================================
    // Drag State Machine
    // ========================================================================

    /// Pointer down on a node at rest in the scene.
    pub fn begin_drag(&mut self, pointer: Vector, viewport: &Viewport) {
        if self.in_stage {
            return;
        }
        self.depth = Depth::Focused;
        self.render(viewport);
        self.drag = Some(NodeDrag {
            last_pointer: pointer,
        });
        debug!(node = %self.id, x = pointer.x, y = pointer.y, "drag started");
    }

    /// Pointer move while dragging: shift the on-screen position by the
    /// pointer delta and re-derive the absolute position from it.
    pub fn drag_to(&mut self, pointer: Vector, viewport: &Viewport) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };

        let delta = pointer.sub(drag.last_pointer);
        drag.last_pointer = pointer;

        let on_screen = self.view.top_left().add(delta);
        self.view.left = on_screen.x;
        self.view.top = on_screen.y;
        self.render(viewport);
        true
    }

    /// Pointer up while dragging. Returns `false` if the node was not being
    /// dragged. The node rests in the scene; [`Node::enter_stage`] follows
    /// when the drop landed on the stage.
    pub fn end_drag(&mut self, viewport: &Viewport) -> bool {
        if self.drag.is_none() {
            return false;
        }
        self.render(viewport);
        self.drag = None;
        self.depth = Depth::SceneItem;
        self.render(viewport);
        debug!(node = %self.id, x = self.position.x, y = self.position.y, "drag ended");
        true
    }

    /// Switch to the at-rest-in-stage state.
    pub(crate) fn enter_stage(&mut self) {
        self.drag = None;
        self.in_stage = true;
        self.depth = Depth::StageItem;
    }

    /// Build a scene clone of this stage template, anchored so the pointer
    /// keeps its offset within the element it grabbed.
    ///
    /// The template itself is left untouched.
    pub fn spawn_clone(&self, id: NodeId, pointer: Vector, viewport: &Viewport) -> Node {
        let grab_offset = pointer.sub(self.view.top_left());
        let position = viewport.to_absolute(pointer.sub(grab_offset));

        let mut clone = Node::new(
            id,
            self.descriptor.clone(),
            position,
            (self.width, self.height),
            Depth::Focused,
        );
        clone.aspect_ratio = self.aspect_ratio;
        clone.render(viewport);
        clone
    }
}
