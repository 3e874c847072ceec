//! core/summary.rs — Human-readable diagnostic state for the UI.

use crate::core::blend::Blend;
use crate::core::catalog::ModeCatalog;

/// Catalog entry nearest the driving frequency, with the residual detuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestMode {
    pub index: usize,
    pub eigen_hz: f32,
    pub detuning_hz: f32,
}

/// One blend endpoint annotated with its weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedMode {
    pub index: usize,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModeSummary {
    pub closest: Option<ClosestMode>,
    pub primary: Option<WeightedMode>,
    pub secondary: Option<WeightedMode>,
}

/// Derive the summary for the current blend. Pure, read-only.
///
/// Closest mode: linear scan over |eigen_hz − drive_hz|, first minimum wins.
/// Primary/secondary: the endpoint carrying weight ≥ 0.5 is primary; at the
/// exact alpha == 0.5 midpoint mode0 stays primary.
pub fn summarize(blend: &Blend, catalog: &ModeCatalog) -> ModeSummary {
    let pair = match blend.pair {
        Some(pair) => pair,
        None => return ModeSummary::default(),
    };

    let mut closest: Option<ClosestMode> = None;
    for (index, mode) in catalog.modes.iter().enumerate() {
        let detuning = (mode.eigen_hz - blend.drive_hz).abs();
        if closest.map_or(true, |c| detuning < c.detuning_hz) {
            closest = Some(ClosestMode {
                index,
                eigen_hz: mode.eigen_hz,
                detuning_hz: detuning,
            });
        }
    }

    let w0 = WeightedMode {
        index: pair.i0,
        weight: 1.0 - pair.alpha,
    };
    let w1 = WeightedMode {
        index: pair.i1,
        weight: pair.alpha,
    };
    let (primary, secondary) = if pair.alpha <= 0.5 { (w0, w1) } else { (w1, w0) };

    ModeSummary {
        closest,
        primary: Some(primary),
        secondary: Some(secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blend::compute_blend;
    use crate::core::catalog::ModeCatalog;
    use crate::core::mode::PlateShape;

    #[test]
    fn closest_mode_minimizes_detuning() {
        let cat = ModeCatalog::build(PlateShape::Square);
        let target = cat.modes[7].eigen_hz;
        let blend = compute_blend(PlateShape::Square, target, 1.0, &cat);
        let summary = summarize(&blend, &cat);
        let closest = summary.closest.unwrap();
        assert_eq!(closest.index, 7);
        assert!(closest.detuning_hz < 1e-3 * target);
    }

    #[test]
    fn primary_follows_dominant_weight() {
        let cat = ModeCatalog::build(PlateShape::Square);
        // Geometric mean of two adjacent base frequencies → alpha ≈ 0.5;
        // nudge either side to force a dominant endpoint.
        let f_mid = (cat.modes[3].base_hz * cat.modes[4].base_hz).sqrt();
        let low = compute_blend(PlateShape::Square, f_mid * 0.97, 1.0, &cat);
        let s = summarize(&low, &cat);
        assert_eq!(s.primary.unwrap().index, low.pair.unwrap().i0);
        assert!(s.primary.unwrap().weight >= s.secondary.unwrap().weight);

        let high = compute_blend(PlateShape::Square, f_mid * 1.03, 1.0, &cat);
        let s = summarize(&high, &cat);
        assert_eq!(s.primary.unwrap().index, high.pair.unwrap().i1);
    }

    #[test]
    fn midpoint_tie_keeps_mode0_primary() {
        use crate::core::blend::{Blend, ModePair};
        let cat = ModeCatalog::build(PlateShape::Circle);
        let blend = Blend {
            shape: PlateShape::Circle,
            drive_hz: 440.0,
            plate_size: 1.0,
            pair: Some(ModePair {
                i0: 5,
                i1: 6,
                alpha: 0.5,
            }),
        };
        let s = summarize(&blend, &cat);
        assert_eq!(s.primary.unwrap().index, 5);
        assert_eq!(s.secondary.unwrap().index, 6);
    }

    #[test]
    fn empty_blend_summarizes_to_nothing() {
        let cat = ModeCatalog {
            shape: PlateShape::Square,
            modes: vec![],
            plate_size: 1.0,
        };
        let blend = compute_blend(PlateShape::Square, 440.0, 1.0, &cat);
        assert_eq!(summarize(&blend, &cat), ModeSummary::default());
    }
}
