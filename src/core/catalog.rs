//! core/catalog.rs — Ordered mode catalog per plate shape.
//!
//! Enumerates the fixed mode bounds for a shape, sorts by complexity and
//! spreads base frequencies logarithmically over 20 Hz..20 kHz, so that a
//! slider sweep on a log axis walks the catalog at a uniform rate.

use crate::core::mode::{Mode, PlateShape, FMAX_HZ, FMIN_HZ, MAX_MODE_INDEX};

/// Sorted, read-mostly list of modes for one shape.
///
/// `eigen_hz` is the only field mutated after build (`set_plate_size`).
#[derive(Clone, Debug)]
pub struct ModeCatalog {
    pub shape: PlateShape,
    pub modes: Vec<Mode>,
    pub plate_size: f32,
}

impl ModeCatalog {
    /// Build the catalog for `shape` at plate size 1.0.
    ///
    /// Square: (m, n) with m, n ∈ [1, 7], m ≠ n — the diagonal m == n is
    /// excluded because that mode is identically zero everywhere.
    /// Circle: angular order m ∈ [0, 7], radial index n ∈ [1, 7].
    ///
    /// Deterministic and pure; callers cache one catalog per shape.
    pub fn build(shape: PlateShape) -> Self {
        let mut modes = Vec::new();
        match shape {
            PlateShape::Square => {
                for m in 1..=MAX_MODE_INDEX {
                    for n in 1..=MAX_MODE_INDEX {
                        if m != n {
                            modes.push(Mode::new(m, n));
                        }
                    }
                }
            }
            PlateShape::Circle => {
                for m in 0..=MAX_MODE_INDEX {
                    for n in 1..=MAX_MODE_INDEX {
                        modes.push(Mode::new(m, n));
                    }
                }
            }
        }

        // Stable sort: equal-complexity pairs keep enumeration order.
        modes.sort_by(|a, b| a.complexity.total_cmp(&b.complexity));

        let n_modes = modes.len();
        let log_lo = FMIN_HZ.ln();
        let log_hi = FMAX_HZ.ln();
        for (i, mode) in modes.iter_mut().enumerate() {
            let t = if n_modes > 1 {
                i as f32 / (n_modes - 1) as f32
            } else {
                0.0
            };
            mode.base_hz = (log_lo + t * (log_hi - log_lo)).exp();
            mode.eigen_hz = mode.base_hz;
        }

        Self {
            shape,
            modes,
            plate_size: 1.0,
        }
    }

    /// Rescale every eigenfrequency in place for a new plate size.
    ///
    /// Larger plates ring lower: eigen_hz = base_hz / size². Caller must
    /// pass a strictly positive size (documented precondition, not checked).
    pub fn set_plate_size(&mut self, size: f32) {
        self.plate_size = size;
        let scale = 1.0 / (size * size);
        for mode in &mut self.modes {
            mode.eigen_hz = mode.base_hz * scale;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_catalog_excludes_diagonal() {
        let cat = ModeCatalog::build(PlateShape::Square);
        // 7*7 pairs minus the 7 diagonal entries.
        assert_eq!(cat.len(), 42);
        assert!(cat.modes.iter().all(|m| m.m != m.n));
    }

    #[test]
    fn circle_catalog_spans_full_bounds() {
        let cat = ModeCatalog::build(PlateShape::Circle);
        // 8 angular orders (incl. 0) × 7 radial indices.
        assert_eq!(cat.len(), 56);
        assert!(cat.modes.iter().all(|m| m.n >= 1));
    }

    #[test]
    fn complexity_is_nondecreasing_after_sort() {
        for shape in [PlateShape::Square, PlateShape::Circle] {
            let cat = ModeCatalog::build(shape);
            assert!(cat
                .modes
                .windows(2)
                .all(|w| w[0].complexity <= w[1].complexity));
        }
    }

    #[test]
    fn base_frequencies_span_audible_band() {
        let cat = ModeCatalog::build(PlateShape::Square);
        let first = cat.modes.first().unwrap();
        let last = cat.modes.last().unwrap();
        assert!((first.base_hz - FMIN_HZ).abs() < 1e-2);
        assert!((last.base_hz - FMAX_HZ).abs() < 2.0);
        assert!(cat.modes.windows(2).all(|w| w[0].base_hz < w[1].base_hz));
    }

    #[test]
    fn set_plate_size_rescales_eigen_only() {
        let mut cat = ModeCatalog::build(PlateShape::Circle);
        let base_before: Vec<f32> = cat.modes.iter().map(|m| m.base_hz).collect();
        cat.set_plate_size(0.5);
        for (mode, base) in cat.modes.iter().zip(&base_before) {
            assert_eq!(mode.base_hz, *base);
            assert!((mode.eigen_hz - base * 4.0).abs() / mode.eigen_hz < 1e-6);
        }
    }
}
