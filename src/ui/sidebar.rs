// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Side panel: running totals, price legend and saved projects.

use crate::models::{annotation::PoleCategory, cost::CostSummary, project::Project};
use crate::util::time::format_date;

/// Result of side panel interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    DeleteProject(String),
    ImportReport,
}

pub fn show(ui: &mut egui::Ui, active: Option<(&Project, CostSummary)>, saved: &[Project]) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::ScrollArea::vertical().id_source("sidebar").show(ui, |ui| {
        if let Some((project, summary)) = active {
            running_totals(ui, project, &summary);
            ui.separator();
        }

        ui.strong("Price legend");
        for category in PoleCategory::ALL {
            ui.horizontal(|ui| {
                ui.label(category_text(category, category.label()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.2} US", category.unit_price()));
                });
            });
        }

        ui.separator();
        if ui.button("Import report...").clicked() {
            action = SidebarAction::ImportReport;
        }
        if saved.is_empty() {
            return;
        }

        ui.strong("Saved projects");
        ui.label(egui::RichText::new(format!("{} project(s)", saved.len())).weak());
        for project in saved {
            let summary = project.cost_summary();
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(project.name.as_str());
                        ui.label(egui::RichText::new(format_date(project.created_at)).small().weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete project").clicked() {
                            action = SidebarAction::DeleteProject(project.id.clone());
                        }
                    });
                });
                ui.horizontal(|ui| {
                    for category in PoleCategory::ALL {
                        let count = summary.get(category).count;
                        if category == PoleCategory::RuralStandard && count == 0 {
                            continue;
                        }
                        ui.label(category_text(category, &format!("{}{}", count, category.short_code())));
                    }
                });
                ui.label(
                    egui::RichText::new(format!("{:.2} US", summary.total))
                        .strong()
                        .color(egui::Color32::from_rgb(0x16, 0xa3, 0x4a)),
                );
            });
        }
    });

    action
}

fn running_totals(ui: &mut egui::Ui, project: &Project, summary: &CostSummary) {
    ui.strong("Project summary");
    ui.label(egui::RichText::new(&project.name).color(egui::Color32::from_rgb(0x25, 0x63, 0xeb)));
    ui.add_space(4.0);

    egui::Grid::new("running_totals").num_columns(2).show(ui, |ui| {
        ui.label("Total poles");
        ui.strong(summary.pole_count().to_string());
        ui.end_row();
        for category in PoleCategory::ALL {
            let line = summary.get(category);
            if category == PoleCategory::RuralStandard && line.count == 0 {
                continue;
            }
            ui.label(category_text(category, category.label()));
            ui.label(format!("{} · {:.2} US", line.count, line.cost));
            ui.end_row();
        }
        ui.strong("Total");
        ui.strong(format!("{:.2} US", summary.total));
        ui.end_row();
    });
}

fn category_text(category: PoleCategory, text: &str) -> egui::RichText {
    let [r, g, b] = category.color();
    egui::RichText::new(text).color(egui::Color32::from_rgb(r, g, b))
}
