// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Summary screen shown after a survey is finalized.

use crate::models::{annotation::PoleCategory, project::Project};

/// Result of summary screen interaction.
pub enum SummaryAction {
    None,
    NewProject,
    SaveImage,
    ExportReport,
}

pub fn show(ui: &mut egui::Ui, project: &Project, can_save_image: bool) -> SummaryAction {
    let mut action = SummaryAction::None;
    let summary = project.cost_summary();

    ui.heading("Survey complete!");
    ui.label(egui::RichText::new("Project saved").weak());
    ui.add_space(12.0);

    egui::Grid::new("summary_grid")
        .num_columns(3)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label("Total poles");
            ui.strong(summary.pole_count().to_string());
            ui.label("");
            ui.end_row();

            for category in PoleCategory::ALL {
                let line = summary.get(category);
                // Rural standard only shows up once used.
                if category == PoleCategory::RuralStandard && line.count == 0 {
                    continue;
                }
                let [r, g, b] = category.color();
                ui.label(egui::RichText::new(category.label()).color(egui::Color32::from_rgb(r, g, b)));
                ui.strong(line.count.to_string());
                ui.label(format!("{:.2} US", line.cost));
                ui.end_row();
            }

            if project.measurement > 0.0 {
                ui.label("Total length");
                ui.strong(format!("{:.1} m", project.measurement));
                ui.label("");
                ui.end_row();
            }
        });

    ui.separator();
    ui.label("Estimated total cost");
    ui.label(
        egui::RichText::new(format!("{:.2} US", summary.total))
            .size(32.0)
            .strong()
            .color(egui::Color32::from_rgb(0x16, 0xa3, 0x4a)),
    );
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui.button("New project").clicked() {
            action = SummaryAction::NewProject;
        }
        if can_save_image && ui.button("⬇ Save image").clicked() {
            action = SummaryAction::SaveImage;
        }
        if ui.button("Export report...").clicked() {
            action = SummaryAction::ExportReport;
        }
    });

    action
}
