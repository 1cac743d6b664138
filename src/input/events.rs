//! Platform-neutral input events fed to the scene by the host UI.

use crate::vector::Vector;

/// Modifier keys held during an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub control: bool,
    pub shift: bool,
    /// Command on macOS, Super/Windows elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    /// Whether a wheel gesture with these modifiers zooms instead of panning.
    pub fn zooms(&self) -> bool {
        self.control || self.platform
    }
}

/// Pointer down/move/up, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Vector,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vector::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Pixels(Vector),
    Lines(Vector),
}

/// Wheel or two-finger trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Vector,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

/// Native pinch gesture update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub position: Vector,
    /// Pinch scale relative to the start of the gesture (1.0 = unchanged)
    pub scale: f64,
}
