// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch file loading.
//!
//! This module classifies a selected file as an image or a PDF document
//! and decodes images into RGBA pixels suitable for display in egui.

use crate::error::{AppError, Result};
use crate::models::project::SourceKind;
use image::RgbaImage;
use std::path::Path;

impl SourceKind {
    /// Classify a file by extension. Anything that is not a PDF or a known image format is rejected.
    pub fn detect(path: &Path) -> Result<Self> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Ok(SourceKind::Document);
        }
        match image::ImageFormat::from_path(path) {
            Ok(_) => Ok(SourceKind::Image),
            Err(_) => Err(AppError::UnsupportedFile {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// A decoded sketch image at native resolution.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    /// Rebuild the RGBA buffer for compositing.
    pub fn to_rgba(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Decode an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let rgba = image::open(path)
        .map_err(|source| AppError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_any_case() {
        assert_eq!(SourceKind::detect(Path::new("plan.PDF")).unwrap(), SourceKind::Document);
        assert_eq!(SourceKind::detect(Path::new("plan.pdf")).unwrap(), SourceKind::Document);
    }

    #[test]
    fn test_detect_images() {
        for name in ["a.png", "b.jpg", "c.JPEG", "d.bmp", "e.webp"] {
            assert_eq!(SourceKind::detect(Path::new(name)).unwrap(), SourceKind::Image, "{name}");
        }
    }

    #[test]
    fn test_reject_other_files() {
        for name in ["notes.txt", "archive.zip", "no_extension"] {
            assert!(matches!(
                SourceKind::detect(Path::new(name)),
                Err(AppError::UnsupportedFile { .. })
            ));
        }
    }

    #[test]
    fn test_load_image_reports_native_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");
        RgbaImage::from_pixel(7, 3, image::Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (7, 3));
        assert_eq!(loaded.pixels.len(), 7 * 3 * 4);
        assert!(loaded.to_rgba().is_some());
    }

    #[test]
    fn test_load_missing_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_image(&dir.path().join("gone.png")),
            Err(AppError::ImageLoad { .. })
        ));
    }
}
