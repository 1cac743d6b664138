//! Pointer handling - node drag start/move/drop, stage cloning, double-click.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently while dragging. It only touches the
//! dragged node; the spatial index is refreshed once on drop.

use crate::constants::{CLICK_SLOP, TEXT_SPAWN_OFFSET};
use crate::input::{InputState, PointerEvent};
use crate::profile_scope;
use crate::scene::{Scene, SceneEvent};
use crate::types::{ContentType, NodeId};
use crate::vector::Vector;
use tracing::debug;

impl Scene {
    /// Pointer pressed. Returns `true` if the event was consumed.
    ///
    /// - On a stage template: spawn a scene clone and start dragging it.
    /// - On a scene node with Alt held: delete the node.
    /// - On a scene node: start dragging it.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_down");

        // A press without a release in between; the lost release happened
        // where the stale drag last saw the pointer.
        if let Some(stale) = self.input_state.dragged_node() {
            let last_pointer = self
                .get(stale)
                .and_then(|n| n.drag())
                .map_or(event.position, |drag| drag.last_pointer);
            debug!(node = %stale, "finishing drag with a lost release");
            self.handle_pointer_up(&PointerEvent {
                position: last_pointer,
                modifiers: event.modifiers,
            });
        }

        let pointer = event.position;
        let viewport = self.viewport;

        if let Some(template_id) = self.stage.template_at(pointer).map(|n| n.id()) {
            let id = self.alloc_id();
            let Some(template) = self.stage.get(template_id) else {
                return false;
            };
            let clone = template.spawn_clone(id, pointer, &viewport);
            debug!(template = %template.id(), clone = %id, "spawned clone from stage");
            self.add_node(clone);
            self.start_drag(id, pointer, true);
            return true;
        }

        if self.stage.contains(pointer) {
            return false;
        }

        let Some(id) = self.node_at(pointer) else {
            return false;
        };

        if event.modifiers.alt {
            return self.delete_node(id);
        }

        self.start_drag(id, pointer, false);
        true
    }

    fn start_drag(&mut self, id: NodeId, pointer: Vector, spawned: bool) {
        let viewport = self.viewport;
        if let Some(node) = self.get_mut(id) {
            node.begin_drag(pointer, &viewport);
            self.input_state.start_dragging(id, pointer, spawned);
        }
    }

    /// Pointer moved anywhere in the window.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        let Some(id) = self.input_state.dragged_node() else {
            return false;
        };
        let viewport = self.viewport;
        self.get_mut(id)
            .is_some_and(|node| node.drag_to(event.position, &viewport))
    }

    /// Pointer released anywhere in the window. Ends the active drag and
    /// resolves stage membership from the release point.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        let InputState::DraggingNode {
            node: id,
            press_pos,
            spawned,
        } = self.input_state.clone()
        else {
            return false;
        };
        self.input_state.reset();

        let pointer = event.position;
        let viewport = self.viewport;
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        node.drag_to(pointer, &viewport);
        node.end_drag(&viewport);

        let moved = pointer.sub(press_pos);
        let is_click = moved.dot(moved) <= CLICK_SLOP * CLICK_SLOP;

        // Pressing a template without dragging it away is a click, not a clone.
        if spawned && is_click {
            self.remove_node(id);
            return true;
        }

        if self.stage.contains(pointer) {
            if let Some(node) = self.remove_node(id) {
                self.stage.accept(node);
            }
        } else {
            let Some(node) = self.get(id) else {
                return false;
            };
            let (position, size) = (node.position(), node.hit_size());
            self.index.insert(id, position, size);
        }

        if !is_click {
            self.emit(SceneEvent::LayoutChanged);
        }
        true
    }

    /// Double click. Activating a directory announces a directory change;
    /// double-clicking empty canvas spawns a text node at the pointer.
    pub fn handle_double_click(&mut self, event: &PointerEvent) -> bool {
        let pointer = event.position;

        let target = if self.stage.contains(pointer) {
            self.stage.template_at(pointer).map(|n| n.descriptor().clone())
        } else {
            self.node_at(pointer)
                .and_then(|id| self.get(id))
                .map(|n| n.descriptor().clone())
        };

        match target {
            Some(descriptor) if descriptor.content_type == ContentType::Directory => {
                let path = descriptor.directory_target().to_string();
                debug!(%path, "change directory requested");
                self.emit(SceneEvent::ChangeDirectory(path));
                true
            }
            Some(_) => false,
            None if self.stage.contains(pointer) => false,
            None => {
                let offset = Vector::new(TEXT_SPAWN_OFFSET, TEXT_SPAWN_OFFSET);
                self.spawn_text(pointer.sub(offset));
                true
            }
        }
    }
}
