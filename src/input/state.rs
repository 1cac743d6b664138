//! Scene input state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingNode   (pointer down on a scene node or stage template)
//! DraggingNode -> Idle   (pointer up anywhere, or the node is deleted)
//! ```
//!
//! Only one node is dragged at a time. Pointer move and pointer up are routed
//! through this state rather than through whatever lies under the pointer, so
//! a drag released outside the node's bounds still ends cleanly.

use crate::types::NodeId;
use crate::vector::Vector;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Dragging a single node
    DraggingNode {
        node: NodeId,
        /// Pointer position at pointer down, for click vs. drag detection
        press_pos: Vector,
        /// The node is a clone spawned from a stage template by this press
        spawned: bool,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    /// Get the node being dragged, if any
    pub fn dragged_node(&self) -> Option<NodeId> {
        match self {
            Self::DraggingNode { node, .. } => Some(*node),
            _ => None,
        }
    }

    pub fn start_dragging(&mut self, node: NodeId, press_pos: Vector, spawned: bool) {
        *self = Self::DraggingNode {
            node,
            press_pos,
            spawned,
        };
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
