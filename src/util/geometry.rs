// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Markers live in display space: pixels of the sketch as it is shown on
//! screen, which is also the overlay's space. Export works in native space:
//! pixels of the source image file. `ScaleFactors` is the only conversion
//! between the two.

use crate::models::annotation::{Annotation, MARKER_HEIGHT, MARKER_WIDTH};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle in display (overlay) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn of(annotation: &Annotation) -> Self {
        Self {
            x: annotation.x,
            y: annotation.y,
            width: annotation.width,
            height: annotation.height,
        }
    }
}

/// Rectangle in native image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Per-axis ratio of native image size to displayed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    /// Factors mapping `displayed` onto `native`. Returns `None` if the displayed size is degenerate.
    pub fn between(displayed: Size, native: Size) -> Option<Self> {
        if displayed.width <= 0.0 || displayed.height <= 0.0 {
            return None;
        }
        Some(Self {
            x: native.width / displayed.width,
            y: native.height / displayed.height,
        })
    }

    pub fn to_native(&self, rect: DisplayRect) -> NativeRect {
        NativeRect {
            x: rect.x * self.x,
            y: rect.y * self.y,
            width: rect.width * self.x,
            height: rect.height * self.y,
        }
    }
}

/// Top-left of a marker centered on a click.
///
/// `click` is in window coordinates, `surface_origin` is the overlay's top-left
/// in the same coordinates. No bounds check: markers may overhang the surface.
pub fn marker_origin(click: (f64, f64), surface_origin: (f64, f64)) -> (f64, f64) {
    (
        click.0 - surface_origin.0 - MARKER_WIDTH / 2.0,
        click.1 - surface_origin.1 - MARKER_HEIGHT / 2.0,
    )
}

/// Displayed size of an image that fills `available_width`, scaled down to `max_height` if taller.
pub fn fit_display_size(native: Size, available_width: f64, max_height: f64) -> Size {
    if native.width <= 0.0 || native.height <= 0.0 {
        return Size::new(0.0, 0.0);
    }
    let aspect = native.width / native.height;
    let mut width = available_width;
    let mut height = width / aspect;
    if height > max_height {
        height = max_height;
        width = height * aspect;
    }
    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_centered_on_click() {
        let (x, y) = marker_origin((250.0, 180.0), (50.0, 30.0));
        assert_eq!(x, 250.0 - 50.0 - 20.0);
        assert_eq!(y, 180.0 - 30.0 - 30.0);
    }

    #[test]
    fn test_marker_may_overhang_surface() {
        let (x, y) = marker_origin((5.0, 5.0), (0.0, 0.0));
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn test_scale_to_native() {
        let scale = ScaleFactors::between(Size::new(800.0, 600.0), Size::new(3200.0, 1200.0)).unwrap();
        let native = scale.to_native(DisplayRect {
            x: 100.0,
            y: 50.0,
            width: 40.0,
            height: 60.0,
        });
        assert_eq!(native.x, 400.0);
        assert_eq!(native.y, 100.0);
        assert_eq!(native.width, 160.0);
        assert_eq!(native.height, 120.0);
    }

    #[test]
    fn test_scale_rejects_unsized_surface() {
        assert!(ScaleFactors::between(Size::new(0.0, 600.0), Size::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn test_fit_wide_image_fills_width() {
        let size = fit_display_size(Size::new(2000.0, 1000.0), 800.0, 600.0);
        assert_eq!(size, Size::new(800.0, 400.0));
    }

    #[test]
    fn test_fit_tall_image_capped_by_height() {
        let size = fit_display_size(Size::new(1000.0, 2000.0), 800.0, 600.0);
        assert_eq!(size, Size::new(300.0, 600.0));
    }
}
