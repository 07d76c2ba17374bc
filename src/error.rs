// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the survey workflow.
//!
//! None of these are fatal: each one is shown to the user as a status
//! message and the active project and saved list are left untouched.

use crate::store::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the project store, storage backends and export.
#[derive(Error, Debug)]
pub enum AppError {
    /// Selected file is neither a PDF nor a decodable image
    #[error("Unsupported file type: {path:?}. Please choose a PDF or an image (JPG, PNG, ...)")]
    UnsupportedFile { path: PathBuf },

    /// Project name missing or blank
    #[error("Please enter a name for the project")]
    EmptyName,

    /// No sketch selected before starting
    #[error("Please select a PDF or image file first")]
    NoSource,

    /// Cable run length must be strictly positive
    #[error("Total length must be greater than zero (got {value})")]
    NonPositiveMeasurement { value: f64 },

    /// Action not allowed in the current workflow phase
    #[error("Cannot {action} while in the {phase:?} phase")]
    InvalidPhase { action: &'static str, phase: Phase },

    /// Sketch image could not be read or decoded
    #[error("Failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Export attempted before the source image finished loading
    #[error("Wait for the image to finish loading before saving")]
    NotReady,

    /// The composited image could not be encoded
    #[error("Failed to generate the image: {0}")]
    Encoding(#[from] image::ImageError),

    /// I/O error while reading or writing the project store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Project store contents could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
