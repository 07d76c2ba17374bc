// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the sketch and its pole markers.
//!
//! The sketch is shown at a fixed display size chosen when the image
//! finishes loading. The overlay shares that rect exactly, so overlay
//! coordinates and displayed-image coordinates are the same thing and
//! markers are stored in them directly.

use crate::models::annotation::{Annotation, PoleCategory};
use crate::util::geometry::{fit_display_size, marker_origin, Size};
use crate::util::style::{MarkerStyle, OVERLAY};

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    /// Add a marker with its top-left at `(x, y)` in display space
    Place { category: PoleCategory, x: f64, y: f64 },
}

/// Overlay sized to the displayed sketch. Not ready until the image has loaded and been laid out.
#[derive(Debug, Default)]
pub struct OverlaySurface {
    size: Option<egui::Vec2>,
}

impl OverlaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the size, e.g. when a new sketch is loaded.
    pub fn reset(&mut self) {
        self.size = None;
    }

    /// Displayed size of the sketch, once known.
    pub fn displayed_size(&self) -> Option<Size> {
        self.size.map(|s| Size::new(s.x as f64, s.y as f64))
    }

    /// Match the overlay to the sketch's displayed size. Only the first call has an effect.
    fn fit(&mut self, native: (u32, u32), available_width: f32, max_height: f32) -> egui::Vec2 {
        *self.size.get_or_insert_with(|| {
            let size = fit_display_size(
                Size::new(native.0 as f64, native.1 as f64),
                available_width as f64,
                max_height as f64,
            );
            log::info!(
                "Overlay sized to {:.0}x{:.0} for {}x{} image",
                size.width,
                size.height,
                native.0,
                native.1
            );
            egui::vec2(size.width as f32, size.height as f32)
        })
    }
}

/// Marker category for the pointer button that clicked.
pub fn category_for_button(button: egui::PointerButton) -> Option<PoleCategory> {
    match button {
        egui::PointerButton::Primary => Some(PoleCategory::Planned),
        egui::PointerButton::Secondary => Some(PoleCategory::Existing),
        _ => None,
    }
}

/// Display the sketch with its markers and turn clicks into placements.
pub fn show(
    ui: &mut egui::Ui,
    surface: &mut OverlaySurface,
    texture: &egui::TextureHandle,
    native_size: (u32, u32),
    annotations: &[Annotation],
    max_height: f32,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    let size = surface.fit(native_size, ui.available_width(), max_height);

    // Secondary clicks are sensed directly; without a context menu attached nothing else claims them.
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::Crosshair);

    ui.painter().image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    let button = if response.clicked() {
        Some(egui::PointerButton::Primary)
    } else if response.secondary_clicked() {
        Some(egui::PointerButton::Secondary)
    } else {
        None
    };

    if let (Some(category), Some(pos)) = (button.and_then(category_for_button), response.interact_pointer_pos()) {
        let (x, y) = marker_origin((pos.x as f64, pos.y as f64), (rect.min.x as f64, rect.min.y as f64));
        action = CanvasAction::Place { category, x, y };
    }

    paint_markers(&ui.painter_at(rect), rect.min, annotations, &OVERLAY);

    action
}

/// Screen rect of a marker whose display-space origin is at `origin`. `None` for zero-sized placeholders.
pub fn marker_screen_rect(origin: egui::Pos2, annotation: &Annotation) -> Option<egui::Rect> {
    if annotation.width == 0.0 && annotation.height == 0.0 {
        return None;
    }
    Some(egui::Rect::from_min_size(
        origin + egui::vec2(annotation.x as f32, annotation.y as f32),
        egui::vec2(annotation.width as f32, annotation.height as f32),
    ))
}

/// Render pass: every marker in list order, later ones on top.
fn paint_markers(painter: &egui::Painter, origin: egui::Pos2, annotations: &[Annotation], style: &MarkerStyle) {
    for annotation in annotations {
        let Some(rect) = marker_screen_rect(origin, annotation) else {
            continue;
        };
        let [r, g, b] = annotation.category.color();
        let color = egui::Color32::from_rgb(r, g, b);

        painter.rect_stroke(rect, 0.0, egui::Stroke::new(style.outline_width as f32, color));
        painter.extend(egui::Shape::dashed_line(
            &[rect.center_top(), rect.center_bottom()],
            egui::Stroke::new(style.midline_width as f32, color),
            style.dash.0 as f32,
            style.dash.1 as f32,
        ));
    }
}
