// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Survey project record.
//!
//! A project holds the sketch reference and the ordered list of pole
//! markers. Insertion order is both display order and report order.

use super::annotation::{Annotation, PoleCategory};
use super::cost::CostSummary;
use serde::{Deserialize, Serialize};

/// What kind of file the sketch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Raster image that can be clicked on
    Image,
    /// PDF document, annotated with manual placement only
    Document,
}

/// Complete project data for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub source: String,
    pub source_kind: SourceKind,
    pub annotations: Vec<Annotation>,
    /// Total cable run length in meters; zero unless entered on the measurement path.
    pub measurement: f64,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

impl Project {
    /// Create a new project with an empty marker list.
    pub fn new(name: String, source: String, source_kind: SourceKind, created_at: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            source,
            source_kind,
            annotations: Vec::new(),
            measurement: 0.0,
            created_at,
        }
    }

    /// Append a click-placed marker at the given display position.
    pub fn place_annotation(&mut self, category: PoleCategory, x: f64, y: f64, width: f64, height: f64) -> &Annotation {
        let number = self.annotations.len() + 1;
        self.annotations.push(Annotation::new(category, number, x, y, width, height));
        &self.annotations[number - 1]
    }

    /// Append a zero-sized marker (no clickable image available).
    pub fn add_placeholder(&mut self, category: PoleCategory) -> &Annotation {
        let number = self.annotations.len() + 1;
        self.annotations.push(Annotation::placeholder(category, number));
        &self.annotations[number - 1]
    }

    /// Remove a marker by id and renumber the rest to `1..N`.
    ///
    /// Returns `false` if no marker has that id.
    pub fn remove_annotation(&mut self, id: &str) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            return false;
        }
        for (index, annotation) in self.annotations.iter_mut().enumerate() {
            annotation.number = index + 1;
        }
        true
    }

    /// Re-tag a marker with the next category in the cycle.
    pub fn cycle_category(&mut self, id: &str) -> Option<PoleCategory> {
        let annotation = self.annotations.iter_mut().find(|a| a.id == id)?;
        annotation.cycle_category();
        Some(annotation.category)
    }

    pub fn cost_summary(&self) -> CostSummary {
        CostSummary::from_annotations(&self.annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new("Main street".into(), "sketch.png".into(), SourceKind::Image, 0)
    }

    fn numbers(project: &Project) -> Vec<usize> {
        project.annotations.iter().map(|a| a.number).collect()
    }

    #[test]
    fn test_numbers_follow_insertion() {
        let mut p = project();
        p.place_annotation(PoleCategory::Planned, 10.0, 10.0, 40.0, 60.0);
        p.add_placeholder(PoleCategory::Existing);
        p.place_annotation(PoleCategory::Existing, 50.0, 10.0, 40.0, 60.0);
        assert_eq!(numbers(&p), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_renumbers_without_gaps() {
        let mut p = project();
        for _ in 0..5 {
            p.add_placeholder(PoleCategory::Planned);
        }
        let second = p.annotations[1].id.clone();
        let last = p.annotations[4].id.clone();
        let kept: Vec<String> = p
            .annotations
            .iter()
            .filter(|a| a.id != second && a.id != last)
            .map(|a| a.id.clone())
            .collect();

        assert!(p.remove_annotation(&second));
        assert_eq!(numbers(&p), vec![1, 2, 3, 4]);
        assert!(p.remove_annotation(&last));
        assert_eq!(numbers(&p), vec![1, 2, 3]);

        let remaining: Vec<String> = p.annotations.iter().map(|a| a.id.clone()).collect();
        assert_eq!(remaining, kept);
    }

    #[test]
    fn test_interleaved_add_remove_keeps_contiguous_numbers() {
        let mut p = project();
        for step in 0..20 {
            if step % 3 == 2 {
                let id = p.annotations[step % p.annotations.len()].id.clone();
                p.remove_annotation(&id);
            } else {
                p.add_placeholder(PoleCategory::RuralStandard);
            }
            let expected: Vec<usize> = (1..=p.annotations.len()).collect();
            assert_eq!(numbers(&p), expected);
        }
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut p = project();
        p.add_placeholder(PoleCategory::Planned);
        assert!(!p.remove_annotation("missing"));
        assert_eq!(p.annotations.len(), 1);
    }

    #[test]
    fn test_cycle_category_by_id() {
        let mut p = project();
        let id = p.add_placeholder(PoleCategory::Planned).id.clone();
        assert_eq!(p.cycle_category(&id), Some(PoleCategory::Existing));
        assert_eq!(p.cycle_category(&id), Some(PoleCategory::RuralStandard));
        assert_eq!(p.cost_summary().rural_standard.count, 1);
        assert_eq!(p.cycle_category("missing"), None);
    }

    #[test]
    fn test_source_kind_serialization() {
        let json = serde_json::to_string(&SourceKind::Document).unwrap();
        assert_eq!(json, "\"document\"");
    }
}
