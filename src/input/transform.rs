//! Canvas transformations - wheel pan, wheel zoom and pinch zoom.
//!
//! Both zoom sources reduce to a single factor and go through
//! [`Scene::zoom_at`], so they cannot drift apart.

use crate::input::{GestureEvent, ScrollDelta, WheelEvent};
use crate::scene::Scene;
use crate::vector::Vector;

impl Scene {
    /// Wheel or trackpad scroll. Zooms when Control/Command is held,
    /// otherwise pans the viewport.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => delta.times(self.settings.wheel_line_height),
        };

        if event.modifiers.zooms() {
            let factor = (-self.settings.wheel_zoom_sensitivity * delta.y).exp();
            return self.zoom_at(event.position, factor);
        }

        if delta.x == 0.0 && delta.y == 0.0 {
            return false;
        }
        self.pan(Vector::new(-delta.x, -delta.y))
    }

    /// Native pinch gesture update.
    pub fn handle_gesture(&mut self, event: &GestureEvent) -> bool {
        let factor = 1.0 + self.settings.pinch_zoom_sensitivity * (event.scale - 1.0);
        self.zoom_at(event.position, factor)
    }
}
