// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Measurement screen: total cable run length.

/// Returns `true` when the user asks to finish. The button stays disabled until the length is positive.
pub fn show(ui: &mut egui::Ui, measurement: &mut f64) -> bool {
    ui.heading("📏 Project length");
    ui.label(egui::RichText::new("Enter the total length identified on the sketch").weak());
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("Total length (meters)");
        ui.add(egui::DragValue::new(measurement).speed(0.1).max_decimals(1));
    });
    *measurement = measurement.max(0.0);
    ui.add_space(8.0);

    ui.add_enabled(*measurement > 0.0, egui::Button::new("💾 Finish survey"))
        .clicked()
}
