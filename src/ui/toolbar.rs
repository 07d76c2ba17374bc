// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Counting toolbar.
//!
//! Manual placement buttons for sketches that cannot be clicked on, and
//! the actions that end the counting phase.

use crate::models::annotation::PoleCategory;

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    None,
    AddManual(PoleCategory),
    Finalize,
    EnterMeasurement,
}

/// `clickable` is true when a sketch image is on screen to place poles on.
pub fn show(ui: &mut egui::Ui, clickable: bool, pole_count: usize) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if !clickable {
            for category in [PoleCategory::Planned, PoleCategory::Existing] {
                let text = format!("➕ Add {} pole ({:.2} US)", category.label().to_lowercase(), category.unit_price());
                if ui.button(text).clicked() {
                    action = ToolbarAction::AddManual(category);
                }
            }
            ui.separator();
        } else {
            ui.label(
                egui::RichText::new("Left click: planned pole, right click: existing pole")
                    .italics()
                    .weak(),
            );
            ui.separator();
        }

        // Finishing is offered once something has been counted.
        let has_poles = pole_count > 0;
        if ui.add_enabled(has_poles, egui::Button::new("Total")).clicked() {
            action = ToolbarAction::Finalize;
        }
        if ui
            .add_enabled(has_poles, egui::Button::new("📏 Enter cable length..."))
            .clicked()
        {
            action = ToolbarAction::EnterMeasurement;
        }
    });

    action
}
