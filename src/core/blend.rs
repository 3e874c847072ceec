//! core/blend.rs — Driving frequency → adjacent-mode blend.
//!
//! Maps a (frequency, plate size) pair onto a continuous position along the
//! catalog's log-frequency axis and splits it into two neighbouring entries
//! plus an interpolation weight. Log is monotonic, so a frequency sweep
//! never jumps backward through the catalog.

use crate::core::catalog::ModeCatalog;
use crate::core::mode::{PlateShape, FMAX_HZ, FMIN_HZ};

/// Indices of the two blended catalog entries plus the weight of the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModePair {
    pub i0: usize,
    pub i1: usize,
    /// Weight of `i1`; `i0` carries 1 − alpha.
    pub alpha: f32,
}

/// Everything downstream stages need to evaluate one frame.
/// `pair` is None for an empty catalog (nothing to render).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blend {
    pub shape: PlateShape,
    pub drive_hz: f32,
    pub plate_size: f32,
    pub pair: Option<ModePair>,
}

impl Blend {
    pub fn empty(shape: PlateShape) -> Self {
        Self {
            shape,
            drive_hz: FMIN_HZ,
            plate_size: 1.0,
            pair: None,
        }
    }
}

/// Clamp to the audible band, mapping non-finite input to the low edge.
#[inline]
fn clamp_band(hz: f32) -> f32 {
    if hz.is_finite() {
        hz.clamp(FMIN_HZ, FMAX_HZ)
    } else {
        FMIN_HZ
    }
}

/// Map a driving frequency onto a blend of two adjacent catalog modes.
///
/// The size scaling is undone first (f_base = drive · size²) so the lookup
/// happens on the catalog's fixed base-frequency axis, then the log-position
/// t·(N−1) is split into floor index and fractional weight. Out-of-band
/// input clamps rather than errors so slider sweeps stay glitch-free at the
/// extremes. plate_size must be strictly positive (caller precondition).
pub fn compute_blend(
    shape: PlateShape,
    drive_hz: f32,
    plate_size: f32,
    catalog: &ModeCatalog,
) -> Blend {
    let drive = clamp_band(drive_hz);
    let n = catalog.len();
    if n == 0 {
        return Blend {
            shape,
            drive_hz: drive,
            plate_size,
            pair: None,
        };
    }

    let f_base = clamp_band(drive * plate_size * plate_size);
    let t = ((f_base.ln() - FMIN_HZ.ln()) / (FMAX_HZ.ln() - FMIN_HZ.ln())).clamp(0.0, 1.0);
    let p = t * (n - 1) as f32;
    let i0 = (p.floor() as usize).min(n - 1);
    let i1 = (i0 + 1).min(n - 1);
    let alpha = (p - i0 as f32).clamp(0.0, 1.0);

    Blend {
        shape,
        drive_hz: drive,
        plate_size,
        pair: Some(ModePair { i0, i1, alpha }),
    }
}
