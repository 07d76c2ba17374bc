// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload screen: project name and sketch selection.

use crate::models::project::SourceKind;
use crate::store::SelectedSource;

/// Result of upload screen interaction.
pub enum UploadAction {
    None,
    PickFile,
    Start,
}

pub fn show(ui: &mut egui::Ui, name: &mut String, source: Option<&SelectedSource>) -> UploadAction {
    let mut action = UploadAction::None;

    ui.heading("Upload sketch");
    ui.label(
        egui::RichText::new("Upload the hand-drawn PDF or image (JPG, PNG) to start the survey")
            .weak(),
    );
    ui.add_space(12.0);

    ui.label("Project name");
    ui.add(egui::TextEdit::singleline(name).hint_text("e.g. Main Street project"));
    ui.add_space(8.0);

    if ui.button("📂 Choose PDF or image...").clicked() {
        action = UploadAction::PickFile;
    }

    if let Some(source) = source {
        let icon = match source.kind {
            SourceKind::Document => "📄",
            SourceKind::Image => "🖼",
        };
        let file_name = source
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("{} Loaded file: {}", icon, file_name))
                .color(egui::Color32::from_rgb(0x16, 0xa3, 0x4a)),
        );
        ui.add_space(8.0);
        if ui.button("Start survey").clicked() {
            action = UploadAction::Start;
        }
    }

    action
}
