// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PoleTally - field survey tool for utility poles
//!
//! A cross-platform desktop application for marking utility poles on a
//! hand-drawn site sketch, estimating the cost of the job and exporting
//! the annotated sketch.

mod app;
mod config;
mod error;
mod io;
mod models;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::PoleTallyApp;
use config::Settings;
use io::storage::{JsonFileBackend, MemoryBackend, ProjectBackend};

fn main() -> Result<()> {
    let settings = Settings::load_or_default();

    // Initialize logging; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level.as_str())).init();

    let backend: Box<dyn ProjectBackend> = match settings.storage_path.clone().or_else(JsonFileBackend::default_path) {
        Some(path) => {
            let backend = JsonFileBackend::new(path);
            log::info!("Using project store {}", backend.path().display());
            Box::new(backend)
        }
        None => {
            log::warn!("No data directory available; projects will not survive a restart");
            Box::new(MemoryBackend::default())
        }
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PoleTally - Field Survey"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PoleTally",
        options,
        Box::new(move |_cc| Ok(Box::new(PoleTallyApp::new(settings, backend)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
