//! render.rs — Headless grayscale PNG snapshot of one sampled frame.
//!
//! Shares the exact core pipeline with the GUI; useful for scripted
//! captures and for eyeballing patterns on machines without a display.

use std::path::Path;

use anyhow::Context;
use image::{GrayImage, Luma};
use tracing::info;

use crate::core::blend::compute_blend;
use crate::core::catalog::ModeCatalog;
use crate::core::mode::PlateShape;
use crate::core::sampler::{to_canvas, FieldSampler};

const BACKGROUND: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([30]);
const OUTLINE: Luma<u8> = Luma([150]);

/// Render one frame at `resolution`×`resolution` pixels and write it as PNG.
pub fn snapshot(
    path: &Path,
    shape: PlateShape,
    drive_hz: f32,
    plate_size: f32,
    resolution: usize,
    threshold_fraction: f32,
) -> anyhow::Result<()> {
    let mut catalog = ModeCatalog::build(shape);
    catalog.set_plate_size(plate_size);
    let blend = compute_blend(shape, drive_hz, plate_size, &catalog);

    let mut sampler = FieldSampler::new(resolution);
    let field = sampler.sample(&blend, &catalog, threshold_fraction);

    let side = resolution.max(2) as u32;
    let mut img = GrayImage::from_pixel(side, side, BACKGROUND);

    let center = [side as f32 / 2.0, side as f32 / 2.0];
    let half = side as f32 * 0.46;

    draw_outline(&mut img, shape, center, half);
    for point in &field.nodal_points {
        let [x, y] = to_canvas(*point, center, half);
        if x >= 0.0 && y >= 0.0 && (x as u32) < side && (y as u32) < side {
            img.put_pixel(x as u32, y as u32, INK);
        }
    }

    img.save(path)
        .with_context(|| format!("writing PNG to {}", path.display()))?;
    info!(
        path = %path.display(),
        points = field.nodal_points.len(),
        "snapshot written"
    );
    Ok(())
}

fn draw_outline(img: &mut GrayImage, shape: PlateShape, center: [f32; 2], half: f32) {
    let side = img.width();
    let mut put = |x: f32, y: f32| {
        if x >= 0.0 && y >= 0.0 && (x as u32) < side && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, OUTLINE);
        }
    };
    match shape {
        PlateShape::Square => {
            let steps = (half * 8.0) as u32;
            for i in 0..=steps {
                let t = -1.0 + 2.0 * i as f32 / steps as f32;
                let [x0, y0] = to_canvas([t, -1.0], center, half);
                let [x1, y1] = to_canvas([t, 1.0], center, half);
                let [x2, y2] = to_canvas([-1.0, t], center, half);
                let [x3, y3] = to_canvas([1.0, t], center, half);
                put(x0, y0);
                put(x1, y1);
                put(x2, y2);
                put(x3, y3);
            }
        }
        PlateShape::Circle => {
            let steps = (half * 8.0) as u32;
            for i in 0..steps {
                let theta = std::f32::consts::TAU * i as f32 / steps as f32;
                let [x, y] = to_canvas([theta.cos(), theta.sin()], center, half);
                put(x, y);
            }
        }
    }
}
