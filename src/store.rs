// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project state store.
//!
//! Owns the single in-progress project, moves it through the survey
//! workflow and keeps the list of finalized projects in sync with the
//! storage backend.
//!
//! ```text
//! Upload -> Counting -> Summary
//!              |           ^
//!              v           |
//!          Measurement ----+
//! Summary -> Upload (reset)
//! ```

use crate::error::{AppError, Result};
use crate::io::storage::ProjectBackend;
use crate::models::annotation::{Annotation, PoleCategory, MARKER_HEIGHT, MARKER_WIDTH};
use crate::models::cost::CostSummary;
use crate::models::project::{Project, SourceKind};
use std::path::{Path, PathBuf};

/// Workflow screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Upload,
    Counting,
    Measurement,
    Summary,
}

/// A sketch chosen on the upload screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// Holds the active project and the saved project list.
pub struct ProjectStore<B: ProjectBackend> {
    backend: B,
    projects: Vec<Project>,
    active: Option<Project>,
    phase: Phase,
    /// Project name typed on the upload screen
    pub name_input: String,
    source: Option<SelectedSource>,
}

impl<B: ProjectBackend> ProjectStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            projects: Vec::new(),
            active: None,
            phase: Phase::Upload,
            name_input: String::new(),
            source: None,
        }
    }

    /// Load previously saved projects. Call once at startup, before the first frame.
    pub fn load(&mut self) -> Result<()> {
        self.projects = self.backend.load()?;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active(&self) -> Option<&Project> {
        self.active.as_ref()
    }

    pub fn source(&self) -> Option<&SelectedSource> {
        self.source.as_ref()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Choose the sketch file. Unsupported files are rejected without touching the current selection.
    pub fn select_source(&mut self, path: &Path) -> Result<SourceKind> {
        self.require(Phase::Upload, "select a file")?;
        let kind = SourceKind::detect(path)?;
        log::info!("Selected {:?} source {}", kind, path.display());
        self.source = Some(SelectedSource {
            path: path.to_path_buf(),
            kind,
        });
        Ok(kind)
    }

    /// Drop the selected sketch, e.g. when it turns out not to decode.
    /// Returns `false` outside the upload phase, where the selection is already in use.
    pub fn clear_source(&mut self) -> bool {
        if self.phase != Phase::Upload {
            return false;
        }
        if let Some(source) = self.source.take() {
            log::info!("Cleared source {}", source.path.display());
        }
        true
    }

    /// Start counting on a new project built from the typed name and the selected sketch.
    pub fn begin_project(&mut self, created_at: u64) -> Result<&Project> {
        self.require(Phase::Upload, "start a project")?;
        let name = self.name_input.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        let source = self.source.as_ref().ok_or(AppError::NoSource)?;

        let project = Project::new(
            name.to_string(),
            source.path.to_string_lossy().into_owned(),
            source.kind,
            created_at,
        );
        log::info!("Started project '{}' ({})", project.name, project.id);
        self.phase = Phase::Counting;
        let project: &Project = self.active.insert(project);
        Ok(project)
    }

    /// Add a fixed-size marker with its top-left at `(x, y)` in display space.
    pub fn place_annotation(&mut self, category: PoleCategory, x: f64, y: f64) -> Result<&Annotation> {
        let project = self.counting_project("place a pole")?;
        let annotation = project.place_annotation(category, x, y, MARKER_WIDTH, MARKER_HEIGHT);
        log::debug!("Placed pole #{} ({:?}) at ({:.1}, {:.1})", annotation.number, category, x, y);
        Ok(annotation)
    }

    /// Add a zero-sized marker without a position.
    pub fn add_manual(&mut self, category: PoleCategory) -> Result<&Annotation> {
        let project = self.counting_project("add a pole")?;
        let annotation = project.add_placeholder(category);
        log::debug!("Added pole #{} ({:?}) manually", annotation.number, category);
        Ok(annotation)
    }

    /// Delete a marker and renumber the rest.
    pub fn remove_annotation(&mut self, id: &str) -> Result<bool> {
        let project = self.counting_project("remove a pole")?;
        let removed = project.remove_annotation(id);
        if removed {
            log::debug!("Removed pole {}, {} left", id, project.annotations.len());
        }
        Ok(removed)
    }

    /// Re-tag a marker with the next category.
    pub fn cycle_category(&mut self, id: &str) -> Result<Option<PoleCategory>> {
        let project = self.counting_project("change a pole")?;
        Ok(project.cycle_category(id))
    }

    /// Move from counting to entering the total cable run length.
    pub fn enter_measurement(&mut self) -> Result<()> {
        self.require(Phase::Counting, "enter a measurement")?;
        self.phase = Phase::Measurement;
        Ok(())
    }

    /// Finish without a measurement: the project is saved with a length of zero.
    pub fn finalize_counting(&mut self) -> Result<()> {
        self.require(Phase::Counting, "finish counting")?;
        self.finalize(0.0)
    }

    /// Finish with a strictly positive cable run length.
    pub fn finalize_measurement(&mut self, measurement: f64) -> Result<()> {
        self.require(Phase::Measurement, "finish the survey")?;
        if !(measurement > 0.0 && measurement.is_finite()) {
            return Err(AppError::NonPositiveMeasurement { value: measurement });
        }
        self.finalize(measurement)
    }

    /// Drop the active project and upload selection and go back to the upload screen.
    pub fn reset(&mut self) {
        self.active = None;
        self.source = None;
        self.name_input.clear();
        self.phase = Phase::Upload;
        log::info!("Workflow reset");
    }

    /// Delete a saved project. Returns `false` if no project has that id.
    pub fn delete_project(&mut self, id: &str) -> Result<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }
        log::info!("Deleted saved project {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Add a project from an exported report to the saved list.
    ///
    /// Returns `false` if a project with the same id is already saved.
    pub fn import_project(&mut self, project: Project) -> Result<bool> {
        if self.projects.iter().any(|p| p.id == project.id) {
            return Ok(false);
        }
        log::info!("Imported project '{}' ({})", project.name, project.id);
        self.projects.push(project);
        self.persist()?;
        Ok(true)
    }

    /// Running cost of the active project.
    pub fn cost_summary(&self) -> CostSummary {
        self.active.as_ref().map(Project::cost_summary).unwrap_or_default()
    }

    fn finalize(&mut self, measurement: f64) -> Result<()> {
        let Some(project) = self.active.as_mut() else {
            return Err(AppError::InvalidPhase {
                action: "finish without a project",
                phase: self.phase,
            });
        };
        project.measurement = measurement;
        let snapshot = project.clone();
        log::info!(
            "Finalized '{}' with {} poles, total {:.2} US",
            snapshot.name,
            snapshot.annotations.len(),
            snapshot.cost_summary().total
        );
        self.projects.push(snapshot);
        self.phase = Phase::Summary;
        self.persist()
    }

    /// Write the saved list. On failure the in-memory list is kept for this session.
    fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.projects).map_err(|e| {
            log::error!("Failed to save projects: {}", e);
            e
        })
    }

    fn require(&self, phase: Phase, action: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(AppError::InvalidPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn counting_project(&mut self, action: &'static str) -> Result<&mut Project> {
        self.require(Phase::Counting, action)?;
        let phase = self.phase;
        self.active.as_mut().ok_or(AppError::InvalidPhase { action, phase })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryBackend;

    fn store() -> ProjectStore<MemoryBackend> {
        ProjectStore::new(MemoryBackend::default())
    }

    fn counting(name: &str) -> ProjectStore<MemoryBackend> {
        let mut s = store();
        s.name_input = name.to_string();
        s.select_source(Path::new("sketch.png")).unwrap();
        s.begin_project(1_700_000_000).unwrap();
        s
    }

    fn finish(s: &mut ProjectStore<MemoryBackend>, name: &str) {
        s.reset();
        s.name_input = name.to_string();
        s.select_source(Path::new("sketch.jpg")).unwrap();
        s.begin_project(0).unwrap();
        s.add_manual(PoleCategory::Planned).unwrap();
        s.finalize_counting().unwrap();
    }

    #[test]
    fn test_begin_requires_name() {
        let mut s = store();
        s.select_source(Path::new("sketch.png")).unwrap();
        s.name_input = "   ".into();
        assert!(matches!(s.begin_project(0), Err(AppError::EmptyName)));
        assert_eq!(s.phase(), Phase::Upload);
        assert!(s.active().is_none());
    }

    #[test]
    fn test_begin_requires_source() {
        let mut s = store();
        s.name_input = "Main street".into();
        assert!(matches!(s.begin_project(0), Err(AppError::NoSource)));
        assert_eq!(s.phase(), Phase::Upload);
    }

    #[test]
    fn test_unsupported_file_keeps_previous_selection() {
        let mut s = store();
        s.select_source(Path::new("plan.pdf")).unwrap();
        assert!(s.select_source(Path::new("notes.txt")).is_err());
        assert_eq!(s.source().unwrap().kind, SourceKind::Document);
    }

    #[test]
    fn test_cleared_source_must_be_chosen_again() {
        let mut s = store();
        s.name_input = "Main street".into();
        assert_eq!(s.select_source(Path::new("broken.png")).unwrap(), SourceKind::Image);
        assert!(s.clear_source());
        assert!(s.source().is_none());
        assert!(matches!(s.begin_project(0), Err(AppError::NoSource)));
        assert_eq!(s.phase(), Phase::Upload);
    }

    #[test]
    fn test_image_project_without_sketch_can_still_finish() {
        let mut s = counting("Unreadable");
        assert!(!s.clear_source());
        assert!(s.source().is_some());

        s.add_manual(PoleCategory::Existing).unwrap();
        s.finalize_counting().unwrap();
        assert_eq!(s.phase(), Phase::Summary);
        assert_eq!(s.projects().len(), 1);
    }

    #[test]
    fn test_begin_creates_empty_project() {
        let s = counting("Main street");
        let project = s.active().unwrap();
        assert_eq!(s.phase(), Phase::Counting);
        assert_eq!(project.name, "Main street");
        assert_eq!(project.source_kind, SourceKind::Image);
        assert!(project.annotations.is_empty());
        assert_eq!(project.created_at, 1_700_000_000);
    }

    #[test]
    fn test_placed_markers_are_fixed_size() {
        let mut s = counting("A");
        let a = s.place_annotation(PoleCategory::Planned, 80.0, 20.0).unwrap();
        assert_eq!((a.width, a.height), (MARKER_WIDTH, MARKER_HEIGHT));
        assert_eq!(a.number, 1);
        let b = s.add_manual(PoleCategory::Existing).unwrap();
        assert_eq!((b.x, b.y, b.width, b.height), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(b.number, 2);
    }

    #[test]
    fn test_annotation_edits_rejected_outside_counting() {
        let mut s = store();
        assert!(s.place_annotation(PoleCategory::Planned, 0.0, 0.0).is_err());
        assert!(s.add_manual(PoleCategory::Planned).is_err());
    }

    #[test]
    fn test_finalize_counting_saves_snapshot_with_zero_length() {
        let mut s = counting("Main street");
        s.place_annotation(PoleCategory::Planned, 1.0, 1.0).unwrap();
        s.finalize_counting().unwrap();

        assert_eq!(s.phase(), Phase::Summary);
        assert_eq!(s.projects().len(), 1);
        assert_eq!(s.projects()[0].measurement, 0.0);
        assert_eq!(s.backend().projects, s.projects());
        assert_eq!(s.backend().saves, 1);
    }

    #[test]
    fn test_measurement_path_requires_positive_length() {
        let mut s = counting("Farm lane");
        s.add_manual(PoleCategory::RuralStandard).unwrap();
        s.enter_measurement().unwrap();

        for bad in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                s.finalize_measurement(bad),
                Err(AppError::NonPositiveMeasurement { .. })
            ));
        }
        assert!(s.projects().is_empty());
        assert_eq!(s.backend().saves, 0);
        assert_eq!(s.phase(), Phase::Measurement);

        s.finalize_measurement(152.5).unwrap();
        assert_eq!(s.projects()[0].measurement, 152.5);
        assert_eq!(s.phase(), Phase::Summary);
    }

    #[test]
    fn test_cannot_finalize_counting_from_measurement() {
        let mut s = counting("A");
        s.enter_measurement().unwrap();
        assert!(matches!(s.finalize_counting(), Err(AppError::InvalidPhase { .. })));
        assert!(s.projects().is_empty());
    }

    #[test]
    fn test_cost_summary_follows_active_project() {
        let mut s = counting("A");
        for category in [
            PoleCategory::Planned,
            PoleCategory::Planned,
            PoleCategory::Planned,
            PoleCategory::Existing,
            PoleCategory::Existing,
            PoleCategory::RuralStandard,
        ] {
            s.add_manual(category).unwrap();
        }
        assert!((s.cost_summary().total - 2.85).abs() < 1e-9);
    }

    #[test]
    fn test_remove_and_cycle_through_store() {
        let mut s = counting("A");
        let first = s.add_manual(PoleCategory::Planned).unwrap().id.clone();
        let second = s.add_manual(PoleCategory::Planned).unwrap().id.clone();
        assert_eq!(s.cycle_category(&second).unwrap(), Some(PoleCategory::Existing));
        assert!(s.remove_annotation(&first).unwrap());
        let remaining = &s.active().unwrap().annotations;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].number, 1);
    }

    #[test]
    fn test_reset_keeps_saved_list() {
        let mut s = counting("A");
        s.finalize_counting().unwrap();
        let saved = s.projects().to_vec();

        s.reset();

        assert_eq!(s.phase(), Phase::Upload);
        assert!(s.active().is_none());
        assert!(s.source().is_none());
        assert!(s.name_input.is_empty());
        assert_eq!(s.projects(), saved.as_slice());
    }

    #[test]
    fn test_delete_removes_only_that_project() {
        let mut s = store();
        finish(&mut s, "One");
        finish(&mut s, "Two");
        finish(&mut s, "Three");
        let before = s.projects().to_vec();

        assert!(s.delete_project(&before[1].id).unwrap());

        assert_eq!(s.projects(), &[before[0].clone(), before[2].clone()]);
        assert_eq!(s.backend().projects, s.projects());
        assert!(!s.delete_project("missing").unwrap());
    }

    #[test]
    fn test_deleting_last_project_is_persisted() {
        let mut s = store();
        finish(&mut s, "Only");
        let id = s.projects()[0].id.clone();
        s.delete_project(&id).unwrap();
        assert!(s.backend().projects.is_empty());
    }

    #[test]
    fn test_import_skips_duplicates() {
        let mut s = store();
        finish(&mut s, "Original");
        let copy = s.projects()[0].clone();
        assert!(!s.import_project(copy).unwrap());

        let other = Project::new("Imported".into(), "x.pdf".into(), SourceKind::Document, 5);
        assert!(s.import_project(other).unwrap());
        assert_eq!(s.projects().len(), 2);
        assert_eq!(s.backend().projects.len(), 2);
        assert_eq!(s.phase(), Phase::Summary);
    }

    #[test]
    fn test_load_restores_saved_projects() {
        let mut first = store();
        finish(&mut first, "Saved");
        let backend = first.backend().clone();

        let mut second = ProjectStore::new(backend);
        second.load().unwrap();
        assert_eq!(second.projects().len(), 1);
        assert_eq!(second.projects()[0].name, "Saved");
    }
}
