//! Pointer, wheel and gesture input handling for the scene.
//!
//! ## Modules
//!
//! - `events` - Platform-neutral event types the host feeds in
//! - `state` - Scene input state machine (idle / dragging a node)
//! - `pointer` - Pointer down/move/up and double-click routing
//! - `transform` - Wheel and pinch gestures (pan, zoom)

mod events;
mod pointer;
mod state;
mod transform;

pub use events::{GestureEvent, Modifiers, PointerEvent, ScrollDelta, WheelEvent};
pub use state::InputState;
