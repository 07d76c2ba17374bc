// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It routes UI actions to the project store, owns
//! the loaded sketch and overlay, and runs image loading and export on
//! background threads whose single result is picked up on the next frame.

use crate::config::Settings;
use crate::error::AppError;
use crate::io::{export, media::LoadedImage, serialization, storage::ProjectBackend};
use crate::models::project::SourceKind;
use crate::store::{Phase, ProjectStore};
use crate::ui::{canvas, help, measurement, properties, sidebar, summary, toolbar, upload};
use crate::util::time::now_secs;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Message shown in the status bar until the next one replaces it.
struct Status {
    text: String,
    is_error: bool,
}

/// Main application state.
pub struct PoleTallyApp {
    settings: Settings,

    /// Active project, workflow phase and saved projects
    store: ProjectStore<Box<dyn ProjectBackend>>,

    /// Overlay aligned with the displayed sketch
    surface: canvas::OverlaySurface,

    /// Sketch texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Sketch pixels at native resolution, kept for export
    image: Option<LoadedImage>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Receiver for background PNG export
    export_job: Option<Receiver<Result<PathBuf, String>>>,

    /// Cable run length typed on the measurement screen
    measurement_input: f64,

    /// Loading state message
    loading_message: Option<String>,

    status: Option<Status>,

    /// Step hint banner visibility
    show_help: bool,
}

impl PoleTallyApp {
    /// Create the application and load the saved projects.
    pub fn new(settings: Settings, backend: Box<dyn ProjectBackend>) -> Self {
        let mut app = Self {
            settings,
            store: ProjectStore::new(backend),
            surface: canvas::OverlaySurface::new(),
            image_texture: None,
            image: None,
            image_loader: None,
            export_job: None,
            measurement_input: 0.0,
            loading_message: None,
            status: None,
            show_help: true,
        };
        if let Err(e) = app.store.load() {
            log::warn!("Could not load saved projects: {}", e);
            app.report_error(format!("Could not load saved projects: {}", e));
        }
        app
    }

    fn report(&mut self, error: AppError) {
        self.report_error(error.to_string());
    }

    fn report_error(&mut self, text: String) {
        log::warn!("{}", text);
        self.status = Some(Status { text, is_error: true });
    }

    fn report_info(&mut self, text: String) {
        self.status = Some(Status { text, is_error: false });
    }

    /// Let the user pick a sketch and, for images, start decoding it.
    fn pick_source(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF or image", &["pdf", "png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"])
            .pick_file()
        else {
            return;
        };

        match self.store.select_source(&path) {
            Ok(SourceKind::Image) => self.load_image_file(path),
            Ok(SourceKind::Document) => self.clear_image(),
            Err(e) => self.report(e),
        }
    }

    fn clear_image(&mut self) {
        self.image_loader = None;
        self.loading_message = None;
        self.image_texture = None;
        self.image = None;
        self.surface.reset();
    }

    /// Load an image file and create a texture for display (asynchronously).
    fn load_image_file(&mut self, path: PathBuf) {
        self.clear_image();
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = crate::io::media::load_image(&path).map_err(|e| e.to_string());
            if let Ok(ref loaded) = result {
                log::info!("Loaded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
            }
            let _ = sender.send(result);
        });
    }

    fn start_project(&mut self) {
        match self.store.begin_project(now_secs()) {
            Ok(_) => self.status = None,
            Err(e) => self.report(e),
        }
    }

    /// Composite the markers onto the full-resolution sketch and write it as PNG.
    fn save_annotated_image(&mut self) {
        let Some(project) = self.store.active() else {
            return;
        };
        let file_name = export::export_filename(&project.name, project.cost_summary().total);
        let annotations = project.annotations.clone();

        let source = self.image.as_ref().and_then(LoadedImage::to_rgba);
        let (Some(source), Some(displayed)) = (source, self.surface.displayed_size()) else {
            self.report(AppError::NotReady);
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(&file_name)
            .save_file()
        else {
            return;
        };

        let (sender, receiver) = channel();
        self.export_job = Some(receiver);
        self.loading_message = Some("Saving image...".to_string());

        std::thread::spawn(move || {
            let result = export::compose_annotated(&source, &annotations, displayed)
                .and_then(|image| export::write_png(&image, &path))
                .map(|_| path)
                .map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    /// Write the active project as a YAML or JSON report.
    fn export_report(&mut self) {
        let Some(project) = self.store.active() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("YAML", &["yaml", "yml"])
            .add_filter("JSON", &["json"])
            .set_file_name(format!("{}.yaml", export::file_stem(&project.name)))
            .save_file()
        else {
            return;
        };

        match serialization::export_report(project, &path) {
            Ok(()) => {
                log::info!("Exported report to {}", path.display());
                self.report_info(format!("Report saved to {}", path.display()));
            }
            Err(e) => self.report_error(format!("Failed to export report: {}", e)),
        }
    }

    /// Add a project from a previously exported report to the saved list.
    fn import_report(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Report", &["yaml", "yml", "json"])
            .pick_file()
        else {
            return;
        };

        let report = match serialization::import_report(&path) {
            Ok(report) => report,
            Err(e) => {
                self.report_error(format!("Failed to import report: {}", e));
                return;
            }
        };
        let name = report.project.name.clone();
        match self.store.import_project(report.project) {
            Ok(true) => self.report_info(format!("Imported '{}'", name)),
            Ok(false) => self.report_info(format!("'{}' is already saved", name)),
            Err(e) => self.report(e),
        }
    }

    fn new_project(&mut self) {
        self.store.reset();
        self.clear_image();
        self.measurement_input = 0.0;
        self.loading_message = None;
        self.status = None;
    }

    /// Pick up results from background work started on earlier frames.
    fn poll_jobs(&mut self, ctx: &egui::Context) {
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => {
                        let size = [loaded.width as usize, loaded.height as usize];
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                        let texture = ctx.load_texture("sketch", color_image, egui::TextureOptions::LINEAR);
                        self.image_texture = Some(texture);
                        self.image = Some(loaded);
                    }
                    Err(e) => {
                        self.store.clear_source();
                        self.report_error(e);
                    }
                }
            }
        }

        if let Some(ref receiver) = self.export_job {
            if let Ok(result) = receiver.try_recv() {
                self.export_job = None;
                self.loading_message = None;

                match result {
                    Ok(path) => self.report_info(format!("Image saved to {}", path.display())),
                    Err(e) => self.report_error(e),
                }
            }
        }
    }

    fn show_counting(&mut self, ui: &mut egui::Ui) {
        let Some(project) = self.store.active() else {
            return;
        };
        let source_kind = project.source_kind;

        ui.heading("✂ Pole identification");
        ui.add_space(4.0);

        let mut canvas_action = canvas::CanvasAction::None;
        match (source_kind, &self.image_texture, &self.image) {
            (SourceKind::Image, Some(texture), Some(image)) => {
                canvas_action = canvas::show(
                    ui,
                    &mut self.surface,
                    texture,
                    (image.width, image.height),
                    &project.annotations,
                    self.settings.max_display_height,
                );
            }
            (SourceKind::Image, _, _) => {
                ui.label(egui::RichText::new(self.loading_message.as_deref().unwrap_or("Image not available, add poles with the buttons below")).weak());
            }
            (SourceKind::Document, _, _) => {
                let name = std::path::Path::new(&project.source)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(format!("📄 {}", name));
            }
        }
        ui.add_space(8.0);

        let clickable = source_kind == SourceKind::Image && self.image_texture.is_some();
        let toolbar_action = toolbar::show(ui, clickable, project.annotations.len());
        ui.add_space(8.0);
        let properties_action = properties::show(ui, &project.annotations);

        // Handle canvas actions
        let result = match canvas_action {
            canvas::CanvasAction::Place { category, x, y } => self.store.place_annotation(category, x, y).map(|_| ()),
            canvas::CanvasAction::None => Ok(()),
        };
        if let Err(e) = result {
            self.report(e);
        }

        // Handle properties panel actions
        let result = match properties_action {
            properties::PropertiesAction::CycleCategory(id) => self.store.cycle_category(&id).map(|_| ()),
            properties::PropertiesAction::DeleteAnnotation(id) => self.store.remove_annotation(&id).map(|_| ()),
            properties::PropertiesAction::None => Ok(()),
        };
        if let Err(e) = result {
            self.report(e);
        }

        // Handle toolbar actions
        let result = match toolbar_action {
            toolbar::ToolbarAction::AddManual(category) => self.store.add_manual(category).map(|_| ()),
            toolbar::ToolbarAction::Finalize => self.store.finalize_counting(),
            toolbar::ToolbarAction::EnterMeasurement => self.store.enter_measurement(),
            toolbar::ToolbarAction::None => Ok(()),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }
}

impl eframe::App for PoleTallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_jobs(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Status bar (bottom)
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{:?}", self.store.phase()));
                ui.separator();
                if !self.show_help && ui.small_button("❓ Help").clicked() {
                    self.show_help = true;
                }
                if let Some(ref message) = self.loading_message {
                    ui.spinner();
                    ui.label(message.as_str());
                } else if let Some(ref status) = self.status {
                    let color = if status.is_error {
                        egui::Color32::from_rgb(0xdc, 0x26, 0x26)
                    } else {
                        egui::Color32::from_gray(180)
                    };
                    ui.label(egui::RichText::new(&status.text).color(color));
                } else {
                    ui.label("Ready");
                }
            });
        });

        // Totals and saved projects (right side)
        let sidebar_action = egui::SidePanel::right("sidebar")
            .default_width(280.0)
            .show(ctx, |ui| {
                let active = match self.store.phase() {
                    Phase::Upload => None,
                    _ => self.store.active().map(|p| (p, self.store.cost_summary())),
                };
                sidebar::show(ui, active, self.store.projects())
            })
            .inner;

        match sidebar_action {
            sidebar::SidebarAction::DeleteProject(id) => {
                if let Err(e) = self.store.delete_project(&id) {
                    self.report(e);
                }
            }
            sidebar::SidebarAction::ImportReport => self.import_report(),
            sidebar::SidebarAction::None => {}
        }

        // Current workflow screen (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.show_help && help::show(ui, self.store.phase()) {
                self.show_help = false;
            }
            egui::ScrollArea::vertical().show(ui, |ui| match self.store.phase() {
                Phase::Upload => {
                    let source = self.store.source().cloned();
                    let action = upload::show(ui, &mut self.store.name_input, source.as_ref());
                    match action {
                        upload::UploadAction::PickFile => self.pick_source(),
                        upload::UploadAction::Start => self.start_project(),
                        upload::UploadAction::None => {}
                    }
                }
                Phase::Counting => self.show_counting(ui),
                Phase::Measurement => {
                    if measurement::show(ui, &mut self.measurement_input) {
                        if let Err(e) = self.store.finalize_measurement(self.measurement_input) {
                            self.report(e);
                        }
                    }
                }
                Phase::Summary => {
                    let Some(project) = self.store.active() else {
                        return;
                    };
                    let can_save_image = project.source_kind == SourceKind::Image;
                    let action = summary::show(ui, project, can_save_image);
                    match action {
                        summary::SummaryAction::NewProject => self.new_project(),
                        summary::SummaryAction::SaveImage => self.save_annotated_image(),
                        summary::SummaryAction::ExportReport => self.export_report(),
                        summary::SummaryAction::None => {}
                    }
                }
            });
        });
    }
}
