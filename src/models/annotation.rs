// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pole marker data structures.
//!
//! This module defines the pole categories, their prices and colors,
//! and the rectangle markers placed on a sketch.

use serde::{Deserialize, Serialize};

/// Width of a click-placed marker in display pixels.
pub const MARKER_WIDTH: f64 = 40.0;

/// Height of a click-placed marker in display pixels.
pub const MARKER_HEIGHT: f64 = 60.0;

/// Kind of utility pole a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoleCategory {
    /// New pole to be installed
    Planned,
    /// Existing pole being modified
    Existing,
    /// Rural standard pole
    RuralStandard,
}

impl PoleCategory {
    pub const ALL: [PoleCategory; 3] = [
        PoleCategory::Planned,
        PoleCategory::Existing,
        PoleCategory::RuralStandard,
    ];

    /// Next category in the re-tag cycle (planned, existing, rural standard, planned, ...).
    pub fn next(self) -> Self {
        match self {
            PoleCategory::Planned => PoleCategory::Existing,
            PoleCategory::Existing => PoleCategory::RuralStandard,
            PoleCategory::RuralStandard => PoleCategory::Planned,
        }
    }

    /// Unit price in US.
    pub fn unit_price(self) -> f64 {
        match self {
            PoleCategory::Planned => 0.35,
            PoleCategory::Existing => 0.20,
            PoleCategory::RuralStandard => 1.40,
        }
    }

    /// Marker outline color (RGB).
    pub fn color(self) -> [u8; 3] {
        match self {
            PoleCategory::Planned => [0x10, 0xb9, 0x81],
            PoleCategory::Existing => [0xf5, 0x9e, 0x0b],
            PoleCategory::RuralStandard => [0x3b, 0x82, 0xf6],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PoleCategory::Planned => "Planned",
            PoleCategory::Existing => "Existing",
            PoleCategory::RuralStandard => "Rural standard",
        }
    }

    /// Abbreviation used in the saved projects list.
    pub fn short_code(self) -> &'static str {
        match self {
            PoleCategory::Planned => "P",
            PoleCategory::Existing => "M",
            PoleCategory::RuralStandard => "PR",
        }
    }
}

/// A pole marker: a rectangle in display coordinates with a category and a 1-based number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub category: PoleCategory,
    pub number: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Annotation {
    /// Create a marker with a fresh identifier.
    pub fn new(category: PoleCategory, number: usize, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            number,
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized placeholder for sources that cannot be clicked (documents).
    pub fn placeholder(category: PoleCategory, number: usize) -> Self {
        Self::new(category, number, 0.0, 0.0, 0.0, 0.0)
    }

    /// Advance to the next category in the cycle.
    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
    }
}
