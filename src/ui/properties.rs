// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pole list panel.
//!
//! Lists the markers of the active project in order, with actions to
//! change a marker's category or delete it.

use crate::models::annotation::Annotation;

/// Result of pole list interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesAction {
    None,
    CycleCategory(String),
    DeleteAnnotation(String),
}

pub fn show(ui: &mut egui::Ui, annotations: &[Annotation]) -> PropertiesAction {
    let mut action = PropertiesAction::None;
    if annotations.is_empty() {
        return action;
    }

    ui.strong(format!("Identified poles ({})", annotations.len()));
    egui::ScrollArea::vertical()
        .id_source("pole_list")
        .max_height(256.0)
        .show(ui, |ui| {
            for annotation in annotations {
                let [r, g, b] = annotation.category.color();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("#{}", annotation.number))
                            .strong()
                            .color(egui::Color32::from_rgb(r, g, b)),
                    );
                    ui.label(annotation.category.label());
                    ui.label(
                        egui::RichText::new(format!("{:.2} US", annotation.category.unit_price())).weak(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            action = PropertiesAction::DeleteAnnotation(annotation.id.clone());
                        }
                        if ui.small_button("Change").clicked() {
                            action = PropertiesAction::CycleCategory(annotation.id.clone());
                        }
                    });
                });
            }
        });

    action
}
