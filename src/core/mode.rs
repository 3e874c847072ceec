//! core/mode.rs — Plate shapes and vibration modes.
//!
//! A mode is a standing-wave pattern indexed by a small integer pair.
//! For a square plate the pair is (m, n) with m ≠ n; for a circular plate
//! it is (angular order m, radial index n).

use serde::{Deserialize, Serialize};

/// Audible band the catalog's base frequencies are spread over.
pub const FMIN_HZ: f32 = 20.0;
pub const FMAX_HZ: f32 = 20_000.0;

/// Upper bound for mode indices (both shapes).
pub const MAX_MODE_INDEX: u8 = 7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlateShape {
    #[default]
    Square,
    Circle,
}

impl PlateShape {
    pub fn label(&self) -> &'static str {
        match self {
            PlateShape::Square => "square",
            PlateShape::Circle => "circle",
        }
    }
}

impl std::fmt::Display for PlateShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PlateShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(PlateShape::Square),
            "circle" | "circular" => Ok(PlateShape::Circle),
            other => Err(format!("unknown plate shape: {other}")),
        }
    }
}

/// One catalog entry. `base_hz` is fixed at build time; `eigen_hz` is the
/// size-rescaled natural frequency and is rewritten on every size change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mode {
    pub m: u8,
    pub n: u8,
    /// sqrt(m² + n²) — sort key only, not a physical quantity.
    pub complexity: f32,
    pub base_hz: f32,
    pub eigen_hz: f32,
}

impl Mode {
    pub fn new(m: u8, n: u8) -> Self {
        let complexity = ((m as f32).powi(2) + (n as f32).powi(2)).sqrt();
        Self {
            m,
            n,
            complexity,
            base_hz: 0.0,
            eigen_hz: 0.0,
        }
    }
}
