// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotated image export.
//!
//! Markers are recorded in display space. Export redraws them on a copy of
//! the source image at native resolution, scaling each marker per axis and
//! using thicker strokes than the on-screen overlay.

use crate::error::{AppError, Result};
use crate::models::annotation::Annotation;
use crate::util::geometry::{DisplayRect, NativeRect, ScaleFactors, Size};
use crate::util::style::{MarkerStyle, EXPORT};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Download name for an exported sketch: `{name}_{total:.2}US.png`.
pub fn export_filename(project_name: &str, total_cost: f64) -> String {
    format!("{}_{:.2}US.png", file_stem(project_name), total_cost)
}

/// Project name with path separators replaced, for use as a file name.
pub fn file_stem(project_name: &str) -> String {
    project_name.replace(['/', '\\'], "_")
}

/// Composite markers onto a copy of the source image.
///
/// `displayed` is the size the overlay had when the markers were placed.
/// Fails with `NotReady` if that size is unknown (image not laid out yet).
pub fn compose_annotated(source: &RgbaImage, annotations: &[Annotation], displayed: Size) -> Result<RgbaImage> {
    let native = Size::new(source.width() as f64, source.height() as f64);
    let scale = ScaleFactors::between(displayed, native).ok_or(AppError::NotReady)?;

    let mut canvas = source.clone();
    for annotation in annotations {
        let rect = scale.to_native(DisplayRect::of(annotation));
        let [r, g, b] = annotation.category.color();
        draw_marker(&mut canvas, rect, Rgba([r, g, b, 255]), &EXPORT);
    }
    log::debug!(
        "Composited {} markers at {}x{} (scale {:.3} x {:.3})",
        annotations.len(),
        source.width(),
        source.height(),
        scale.x,
        scale.y
    );
    Ok(canvas)
}

/// Encode as PNG and write to `path`.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("Exported annotated image to {}", path.display());
    Ok(())
}

fn draw_marker(img: &mut RgbaImage, rect: NativeRect, color: Rgba<u8>, style: &MarkerStyle) {
    // A zero-area outline strokes nothing.
    if rect.width == 0.0 && rect.height == 0.0 {
        return;
    }

    let half = style.outline_width / 2.0;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
    fill_rect(img, left - half, top - half, right + half, top + half, color);
    fill_rect(img, left - half, bottom - half, right + half, bottom + half, color);
    fill_rect(img, left - half, top - half, left + half, bottom + half, color);
    fill_rect(img, right - half, top - half, right + half, bottom + half, color);

    let center_x = rect.x + rect.width / 2.0;
    let half = style.midline_width / 2.0;
    let (dash, gap) = style.dash;
    let mut y = top;
    while y < bottom {
        let end = (y + dash).min(bottom);
        fill_rect(img, center_x - half, y, center_x + half, end, color);
        y += dash + gap;
    }
}

/// Fill pixels whose centers fall inside `[x0, x1) x [y0, y1)`, clipped to the image.
fn fill_rect(img: &mut RgbaImage, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba<u8>) {
    let clamp = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as u32;
    let (xs, xe) = (clamp(x0, img.width()), clamp(x1, img.width()));
    let (ys, ye) = (clamp(y0, img.height()), clamp(y1, img.height()));
    for py in ys..ye {
        for px in xs..xe {
            img.put_pixel(px, py, color);
        }
    }
}
