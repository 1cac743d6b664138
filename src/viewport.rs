//! Pan/zoom transform between absolute (scene) and viewport (pixel) space.
//!
//! The viewport is a pure value: it never renders anything itself. The
//! [`Scene`](crate::scene::Scene) is the only owner and re-renders every member
//! node after each mutation.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::vector::Vector;

/// Clamp a scale into the supported zoom range.
#[inline]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return DEFAULT_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Absolute point shown at the viewport's top-left pixel
    origin: Vector,
    /// Pixels per absolute unit, always within `MIN_SCALE..=MAX_SCALE`
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Vector::ZERO,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Viewport {
    pub fn new(origin: Vector, scale: f64) -> Self {
        Self {
            origin,
            scale: clamp_scale(scale),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    pub fn set_origin(&mut self, origin: Vector) {
        self.origin = origin;
    }

    /// Absolute point -> viewport pixel.
    #[inline]
    pub fn to_viewport(&self, p: Vector) -> Vector {
        p.sub(self.origin).times(self.scale)
    }

    /// Viewport pixel -> absolute point.
    #[inline]
    pub fn to_absolute(&self, p: Vector) -> Vector {
        p.times(1.0 / self.scale).add(self.origin)
    }

    /// Shift the origin by a raw pixel delta. The delta is not divided by the
    /// scale: one pixel of device motion moves the origin one unit.
    ///
    /// Non-finite deltas are rejected and return `false`.
    pub fn pan(&mut self, delta: Vector) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.origin = self.origin.add(delta);
        true
    }

    /// Multiply the scale by `factor`, keeping the absolute point under
    /// `pointer` at the same viewport pixel.
    ///
    /// Returns `true` if the scale changed. Non-finite or non-positive
    /// factors are rejected.
    pub fn zoom_at(&mut self, pointer: Vector, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || !pointer.is_finite() {
            return false;
        }

        let before = self.to_absolute(pointer);
        let old_scale = self.scale;
        self.scale = clamp_scale(self.scale * factor);
        if self.scale == old_scale {
            return false;
        }

        let after = self.to_absolute(pointer);
        self.origin = self.origin.sub(after.sub(before));
        true
    }
}
