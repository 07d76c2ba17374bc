// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Step-by-step help banner shown above the workflow screens.

use crate::store::Phase;

/// Hint for the current step, if it has one.
pub fn step_hint(phase: Phase) -> Option<(u8, &'static str)> {
    match phase {
        Phase::Upload => Some((1, "Choose the hand-drawn PDF or image (JPG, PNG) and give the project a name.")),
        Phase::Counting => Some((
            2,
            "Left click adds a planned pole, right click an existing one. Each marker gets the standard size.",
        )),
        Phase::Measurement => Some((3, "Enter the total cable length of the project to finish the survey.")),
        Phase::Summary => None,
    }
}

/// Draw the banner. Returns `true` when the user hides it.
pub fn show(ui: &mut egui::Ui, phase: Phase) -> bool {
    let Some((step, text)) = step_hint(phase) else {
        return false;
    };

    let mut hide = false;
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(0xef, 0xf6, 0xff))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(0xbf, 0xdb, 0xfe)))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("❓ Step {}:", step))
                        .strong()
                        .color(egui::Color32::from_rgb(0x25, 0x63, 0xeb)),
                );
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(60)));
                if ui.small_button("Hide").clicked() {
                    hide = true;
                }
            });
        });
    ui.add_space(8.0);
    hide
}
