use crate::core::mode::PlateShape;
use crate::core::sampler::SampledField;
use crate::core::summary::ModeSummary;

/// Snapshot handed to the window code each frame.
#[derive(Clone, Debug)]
pub struct UiFrame {
    pub shape: PlateShape,
    pub drive_hz: f32,
    pub plate_size: f32,
    pub field: SampledField,
    pub summary: ModeSummary,
    /// Eigenfrequencies of the active catalog, for the spectrum plot.
    pub eigen_hz: Vec<f32>,
    /// Mode index labels (m, n) aligned with `eigen_hz`.
    pub mode_labels: Vec<(u8, u8)>,
    pub compute_ms: f32,
}

impl UiFrame {
    pub fn empty() -> Self {
        Self {
            shape: PlateShape::Square,
            drive_hz: 440.0,
            plate_size: 1.0,
            field: SampledField::default(),
            summary: ModeSummary::default(),
            eigen_hz: Vec::new(),
            mode_labels: Vec::new(),
            compute_ms: 0.0,
        }
    }
}
