//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between screen coordinates (pixels, origin top-left) and
//! document coordinates (floor-local units). Manages zoom and pan so that
//! `screen = document * scale + offset` on both axes.

use std::fmt;

use lichtplan_core::constants::{MAX_SCALE, MIN_SCALE, VIEW_PADDING, WHEEL_ZOOM_STEP, ZOOM_STEP};
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::catalog::SymbolCatalog;
use crate::model::Floor;

/// Read-only copy of the transform handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Clamps a scale into the allowed range.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Pan/zoom state of a single floor view.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
    zoom_step: f64,
    wheel_zoom_step: f64,
    padding: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 with no offset.
    pub fn new() -> Self {
        Self::with_steps(ZOOM_STEP, WHEEL_ZOOM_STEP, VIEW_PADDING)
    }

    /// Creates a viewport with custom zoom factors and fit padding.
    ///
    /// Steps not greater than 1 fall back to the defaults.
    pub fn with_steps(zoom_step: f64, wheel_zoom_step: f64, padding: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            zoom_step: if zoom_step > 1.0 { zoom_step } else { ZOOM_STEP },
            wheel_zoom_step: if wheel_zoom_step > 1.0 {
                wheel_zoom_step
            } else {
                WHEEL_ZOOM_STEP
            },
            padding: padding.max(0.0),
        }
    }

    /// Gets the current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            scale: self.scale,
        }
    }

    /// Sets the scale, clamped to [MIN_SCALE, MAX_SCALE]. Non-finite input is ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = clamp_scale(scale);
        }
    }

    /// Zooms in by one button step.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * self.zoom_step);
    }

    /// Zooms out by one button step.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / self.zoom_step);
    }

    /// Resets to 1:1 with no offset.
    pub fn reset_zoom(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Sets the absolute pan offset.
    pub fn pan(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.offset_x = x;
            self.offset_y = y;
        }
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan(self.offset_x + dx, self.offset_y + dy);
    }

    /// Converts screen coordinates to document coordinates.
    ///
    /// Formula:
    /// ```text
    /// doc_x = (screen_x - offset_x) / scale
    /// doc_y = (screen_y - offset_y) / scale
    /// ```
    pub fn screen_to_document(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            (screen_x - self.offset_x) / self.scale,
            (screen_y - self.offset_y) / self.scale,
        )
    }

    /// Converts document coordinates to screen coordinates.
    pub fn document_to_screen(&self, doc_x: f64, doc_y: f64) -> (f64, f64) {
        (
            doc_x * self.scale + self.offset_x,
            doc_y * self.scale + self.offset_y,
        )
    }

    /// Zooms so that the document point under the pointer stays under the pointer.
    ///
    /// The new scale is clamped first; the offset is then solved from
    /// `offset = pointer - doc_point * new_scale`.
    pub fn zoom_at(&mut self, pointer_x: f64, pointer_y: f64, new_scale: f64) {
        if !new_scale.is_finite() {
            return;
        }
        let (doc_x, doc_y) = self.screen_to_document(pointer_x, pointer_y);
        let scale = clamp_scale(new_scale);
        self.scale = scale;
        self.offset_x = pointer_x - doc_x * scale;
        self.offset_y = pointer_y - doc_y * scale;
    }

    /// Zooms in by one button step, anchored at the pointer.
    pub fn zoom_in_at(&mut self, pointer_x: f64, pointer_y: f64) {
        self.zoom_at(pointer_x, pointer_y, self.scale * self.zoom_step);
    }

    /// Zooms out by one button step, anchored at the pointer.
    pub fn zoom_out_at(&mut self, pointer_x: f64, pointer_y: f64) {
        self.zoom_at(pointer_x, pointer_y, self.scale / self.zoom_step);
    }

    /// One mouse wheel notch, anchored at the pointer.
    pub fn wheel_zoom(&mut self, pointer_x: f64, pointer_y: f64, zoom_in: bool) {
        let factor = if zoom_in {
            self.wheel_zoom_step
        } else {
            1.0 / self.wheel_zoom_step
        };
        self.zoom_at(pointer_x, pointer_y, self.scale * factor);
    }

    /// Fits the given document rectangle into a viewport of the given size.
    ///
    /// The available area is the viewport minus `padding` on every side; a viewport
    /// with no room left clamps to the minimum scale. Degenerate bounds, or a
    /// non-finite viewport size, leave the transform unchanged. Returns whether the
    /// transform was updated.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, viewport_width: f64, viewport_height: f64) -> bool {
        if bounds.is_degenerate() || !(viewport_width.is_finite() && viewport_height.is_finite()) {
            return false;
        }

        let avail_w = viewport_width - self.padding * 2.0;
        let avail_h = viewport_height - self.padding * 2.0;

        // Use the smaller scale to fit everything
        let scale_x = clamp_scale(avail_w / bounds.width);
        let scale_y = clamp_scale(avail_h / bounds.height);
        let scale = clamp_scale(scale_x.min(scale_y));

        // Center the content
        let (center_x, center_y) = bounds.center();
        self.scale = scale;
        self.offset_x = viewport_width / 2.0 - center_x * scale;
        self.offset_y = viewport_height / 2.0 - center_y * scale;
        true
    }

    /// Fits everything drawn on `floor` into the viewport.
    pub fn fit_floor(
        &mut self,
        floor: &Floor,
        catalog: &dyn SymbolCatalog,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        match floor.content_bounds(catalog) {
            Some(bounds) => self.fit_to_bounds(&bounds, viewport_width, viewport_height),
            None => false,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Pan: ({:.1}, {:.1})",
            self.scale * 100.0,
            self.offset_x,
            self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
