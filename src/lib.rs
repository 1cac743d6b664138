//! Spatial canvas core.
//!
//! An infinitely pannable/zoomable surface holding image, video, PDF, text
//! and directory nodes. This crate is headless: the host UI feeds pointer,
//! wheel and gesture events into a [`Scene`] and draws each node from its
//! derived [`ViewGeometry`](types::ViewGeometry).
//!
//! - [`vector`] - Immutable 2D(+z) vector math
//! - [`viewport`] - Pan/zoom transform between absolute and pixel space
//! - [`node`] - Nodes and their drag state machine
//! - [`stage`] - Fixed tray of templates that spawn clones
//! - [`scene`] - Node collection, viewport and stage owner
//! - [`input`] - Event routing for the scene

pub mod constants;
pub mod content;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod media;
pub mod node;
pub mod perf;
pub mod scene;
pub mod settings;
pub mod spatial_index;
pub mod stage;
pub mod types;
pub mod vector;
pub mod viewport;

pub use error::{CanvasError, CanvasResult};
pub use node::{Node, NodeState};
pub use scene::{Scene, SceneEvent};
pub use stage::Stage;
pub use types::{Bounds, ContentDescriptor, ContentType, Depth, NodeId, NodeRecord};
pub use vector::Vector;
pub use viewport::Viewport;
