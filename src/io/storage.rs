// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persistence of the saved project list.
//!
//! The whole list is stored under a single key: one JSON file holding an
//! array of finalized projects. A missing file is an empty list.

use crate::error::Result;
use crate::models::project::Project;
use std::path::{Path, PathBuf};

/// File name of the project list inside the data directory.
pub const STORE_FILE_NAME: &str = "projects.json";

/// Somewhere to keep the saved project list between runs.
pub trait ProjectBackend {
    /// Load the previously saved list; empty if nothing has been saved.
    fn load(&mut self) -> Result<Vec<Project>>;

    /// Replace the saved list.
    fn save(&mut self, projects: &[Project]) -> Result<()>;
}

impl ProjectBackend for Box<dyn ProjectBackend> {
    fn load(&mut self) -> Result<Vec<Project>> {
        (**self).load()
    }

    fn save(&mut self, projects: &[Project]) -> Result<()> {
        (**self).save(projects)
    }
}

/// JSON file backend.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/poletally/projects.json`, if the platform has a data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("poletally").join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectBackend for JsonFileBackend {
    fn load(&mut self) -> Result<Vec<Project>> {
        if !self.path.exists() {
            log::debug!("No project store at {:?}", self.path);
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(&self.path)?;
        let projects: Vec<Project> = serde_json::from_str(&json)?;
        log::info!("Loaded {} saved projects from {:?}", projects.len(), self.path);
        Ok(projects)
    }

    fn save(&mut self, projects: &[Project]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(projects)?;
        std::fs::write(&self.path, json)?;
        log::debug!("Saved {} projects to {:?}", projects.len(), self.path);
        Ok(())
    }
}

/// In-memory backend, used when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    pub projects: Vec<Project>,
    pub saves: usize,
}

impl ProjectBackend for MemoryBackend {
    fn load(&mut self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn save(&mut self, projects: &[Project]) -> Result<()> {
        self.projects = projects.to_vec();
        self.saves += 1;
        Ok(())
    }
}
