//! core/sampler.rs — Grid evaluation and nodal point extraction.
//!
//! Two-pass scheme over a uniform R×R grid: evaluate the blended
//! displacement into a flat buffer and track the peak magnitude, then
//! collect every inside-plate point whose |u| falls under the adaptive
//! threshold. The value buffer lives on the sampler and is reused across
//! frames, so the hot path allocates only the output point list.

use crate::core::blend::Blend;
use crate::core::catalog::ModeCatalog;
use crate::core::displacement;
use crate::core::mode::PlateShape;

pub const DEFAULT_RESOLUTION: usize = 320;
pub const DEFAULT_THRESHOLD_FRACTION: f32 = 0.08;

/// Result of one sampling pass. Nodal points are in normalized [-1, 1]²
/// coordinates; use [`to_canvas`] to map them into screen space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledField {
    pub nodal_points: Vec<[f32; 2]>,
    pub max_abs: f32,
}

/// Reusable sampling workspace (one flat R² value buffer).
#[derive(Debug)]
pub struct FieldSampler {
    resolution: usize,
    values: Vec<f32>,
}

impl FieldSampler {
    pub fn new(resolution: usize) -> Self {
        let resolution = resolution.max(2);
        Self {
            resolution,
            values: vec![0.0; resolution * resolution],
        }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: usize) {
        let resolution = resolution.max(2);
        if resolution != self.resolution {
            self.resolution = resolution;
            self.values.resize(resolution * resolution, 0.0);
        }
    }

    /// Sample the blended field and extract near-zero points.
    ///
    /// `threshold_fraction` (τ) sets the nodal band as τ·max(max_abs, 1);
    /// the 1-floor keeps a degenerate all-zero field from turning a zero
    /// threshold into an all-or-nothing classification. An empty blend
    /// yields an empty point set.
    pub fn sample(
        &mut self,
        blend: &Blend,
        catalog: &ModeCatalog,
        threshold_fraction: f32,
    ) -> SampledField {
        let pair = match blend.pair {
            Some(pair) => pair,
            None => return SampledField::default(),
        };
        let (mode0, mode1) = match (catalog.modes.get(pair.i0), catalog.modes.get(pair.i1)) {
            (Some(a), Some(b)) => (a, b),
            _ => return SampledField::default(),
        };

        let r = self.resolution;
        let step = 2.0 / (r - 1) as f32;
        let mut max_abs = 0.0f32;

        // Pass 1: fill the value buffer, row-major, and find the peak.
        for j in 0..r {
            let yn = -1.0 + j as f32 * step;
            let row = &mut self.values[j * r..(j + 1) * r];
            for (i, slot) in row.iter_mut().enumerate() {
                let xn = -1.0 + i as f32 * step;
                let u = if inside_plate(blend.shape, xn, yn) {
                    let v0 = displacement::evaluate(blend.shape, mode0, xn, yn);
                    let v1 = displacement::evaluate(blend.shape, mode1, xn, yn);
                    (1.0 - pair.alpha) * v0 + pair.alpha * v1
                } else {
                    0.0
                };
                max_abs = max_abs.max(u.abs());
                *slot = u;
            }
        }

        let threshold = threshold_fraction * max_abs.max(1.0);

        // Pass 2: collect inside points under the threshold.
        let mut nodal_points = Vec::new();
        for j in 0..r {
            let yn = -1.0 + j as f32 * step;
            for i in 0..r {
                let xn = -1.0 + i as f32 * step;
                if inside_plate(blend.shape, xn, yn) && self.values[j * r + i].abs() <= threshold {
                    nodal_points.push([xn, yn]);
                }
            }
        }

        SampledField {
            nodal_points,
            max_abs,
        }
    }
}

#[inline]
pub fn inside_plate(shape: PlateShape, xn: f32, yn: f32) -> bool {
    match shape {
        PlateShape::Square => xn.abs() <= 1.0 && yn.abs() <= 1.0,
        PlateShape::Circle => xn.hypot(yn) <= 1.0,
    }
}

/// Map a normalized point into canvas space with y growing downward.
#[inline]
pub fn to_canvas(point: [f32; 2], center: [f32; 2], half_extent: f32) -> [f32; 2] {
    [
        center[0] + point[0] * half_extent,
        center[1] - point[1] * half_extent,
    ]
}
