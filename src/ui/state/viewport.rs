// SPDX-License-Identifier: MPL-2.0
//! Viewport transform state: zoom scale and pan offset.
//!
//! The transform is the only place scale/pan is applied — region geometry
//! stays in source-image pixel space and never needs recomputation.

use iced::Vector;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const DEFAULT_SCALE: f32 = 1.0;
/// Fixed zoom step, keeping a small predictable set of discrete zoom levels.
pub const ZOOM_STEP: f32 = 0.2;

/// Zoom scale, guaranteed to be within `[0.5, 3.0]`.
///
/// Clamping is silent saturation: out-of-range values are pulled to the
/// nearest bound, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new zoom scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Increases the scale by one step.
    #[must_use]
    pub fn zoomed_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// Decreases the scale by one step.
    #[must_use]
    pub fn zoomed_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Owned zoom/pan state for one viewer instance.
///
/// Created at `scale = 1.0, offset = (0, 0)`; mutated only by the
/// interaction controller; destroyed with the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportTransform {
    scale: ZoomScale,
    offset: Vector,
}

impl ViewportTransform {
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn zoom_scale(&self) -> ZoomScale {
        self.scale
    }

    /// Pan offset in surface pixels; deliberately unconstrained.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Current scale as a whole percentage for display.
    #[must_use]
    pub fn scale_percent(&self) -> i32 {
        (self.scale.value() * 100.0).round() as i32
    }

    pub fn zoom_in(&mut self) {
        self.scale = self.scale.zoomed_in();
    }

    pub fn zoom_out(&mut self) {
        self.scale = self.scale.zoomed_out();
    }

    /// Unconditional pan assignment.
    pub fn pan_to(&mut self, offset: Vector) {
        self.offset = offset;
    }

    /// Restores `scale = 1.0, offset = (0, 0)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
