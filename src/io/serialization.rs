// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project report export and import.
//!
//! A finalized survey can be written out as a standalone YAML or JSON
//! report (project record plus its cost breakdown) and read back in.

use crate::models::{annotation::PoleCategory, project::Project};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cost line of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub category: PoleCategory,
    pub count: usize,
    pub unit_price: f64,
    pub cost: f64,
}

/// Shareable report for a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project: Project,
    pub costs: Vec<CostLine>,
    pub total: f64,
}

impl ProjectReport {
    pub fn new(project: &Project) -> Self {
        let summary = project.cost_summary();
        let costs = PoleCategory::ALL
            .iter()
            .map(|&category| {
                let line = summary.get(category);
                CostLine {
                    category,
                    count: line.count,
                    unit_price: category.unit_price(),
                    cost: line.cost,
                }
            })
            .collect();
        Self {
            project: project.clone(),
            costs,
            total: summary.total,
        }
    }
}

/// Write a report, choosing the format from the file extension.
pub fn export_report(project: &Project, path: &Path) -> Result<()> {
    let report = ProjectReport::new(project);
    match extension(path).as_deref() {
        Some("yaml") | Some("yml") => export_yaml(&report, path),
        Some("json") => export_json(&report, path),
        other => bail!("Unsupported report extension: {:?}", other),
    }
}

/// Read a report, choosing the format from the file extension.
pub fn import_report(path: &Path) -> Result<ProjectReport> {
    match extension(path).as_deref() {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported report extension: {:?}", other),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase)
}

/// Export a report to YAML format.
pub fn export_yaml(report: &ProjectReport, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(report)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a report to JSON format.
pub fn export_json(report: &ProjectReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a report from YAML format.
pub fn import_yaml(path: &Path) -> Result<ProjectReport> {
    let yaml = std::fs::read_to_string(path)?;
    let report = serde_yaml::from_str(&yaml)?;
    Ok(report)
}

/// Import a report from JSON format.
pub fn import_json(path: &Path) -> Result<ProjectReport> {
    let json = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&json)?;
    Ok(report)
}
