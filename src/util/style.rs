// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke widths and dash patterns for pole markers.

/// How a marker is stroked: rectangle outline plus a dashed vertical midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub outline_width: f64,
    pub midline_width: f64,
    /// Dash length and gap length.
    pub dash: (f64, f64),
}

/// Interactive overlay on top of the displayed sketch.
pub const OVERLAY: MarkerStyle = MarkerStyle {
    outline_width: 3.0,
    midline_width: 2.0,
    dash: (8.0, 4.0),
};

/// Full-resolution exported image.
pub const EXPORT: MarkerStyle = MarkerStyle {
    outline_width: 5.0,
    midline_width: 3.0,
    dash: (15.0, 8.0),
};
