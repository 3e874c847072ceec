//! core/displacement.rs — Closed-form mode displacement fields.
//!
//! Pure functions over normalized coordinates (xn, yn) ∈ [-1, 1]².
//! The circular field is a damped-cosine approximation, not a true
//! Bessel eigenmode; exact eigenmodes are out of scope.

use std::f32::consts::PI;

use crate::core::mode::{Mode, PlateShape};

/// Gaussian radial damping for the circular approximation.
pub const CIRCLE_DAMPING: f32 = 1.2;

/// Square-plate displacement at (xn, yn) for mode (m, n).
///
/// Coordinates map to the unit square via X=(xn+1)/2, Y=(yn+1)/2, then
/// u = cos(nπX)cos(mπY) − cos(mπX)cos(nπY). The m == n diagonal is
/// identically zero; the catalog never emits it, but the function still
/// returns exact 0 for it.
#[inline]
pub fn square_displacement(xn: f32, yn: f32, m: u8, n: u8) -> f32 {
    if m == n {
        return 0.0;
    }
    let x = (xn + 1.0) * 0.5;
    let y = (yn + 1.0) * 0.5;
    let m = m as f32;
    let n = n as f32;
    (n * PI * x).cos() * (m * PI * y).cos() - (m * PI * x).cos() * (n * PI * y).cos()
}

/// Circular-plate displacement at (xn, yn) for angular order m and radial
/// index nr. Points outside the unit disc return exact 0.
#[inline]
pub fn circle_displacement(xn: f32, yn: f32, m: u8, nr: u8) -> f32 {
    let r = xn.hypot(yn);
    if r > 1.0 {
        return 0.0;
    }
    let theta = yn.atan2(xn);
    (m as f32 * theta).cos() * (nr as f32 * PI * r).cos() * (-CIRCLE_DAMPING * r * r).exp()
}

/// Shape-dispatched evaluation of one catalog mode.
#[inline]
pub fn evaluate(shape: PlateShape, mode: &Mode, xn: f32, yn: f32) -> f32 {
    match shape {
        PlateShape::Square => square_displacement(xn, yn, mode.m, mode.n),
        PlateShape::Circle => circle_displacement(xn, yn, mode.m, mode.n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_diagonal_is_exactly_zero() {
        for m in 1..=7u8 {
            for &(x, y) in &[(0.0, 0.0), (-1.0, 1.0), (0.3, -0.7), (0.99, 0.01)] {
                assert_eq!(square_displacement(x, y, m, m), 0.0);
            }
        }
    }

    #[test]
    fn square_swapping_indices_negates_field() {
        for &(x, y) in &[(0.1, 0.2), (-0.5, 0.8), (0.0, -0.33)] {
            let a = square_displacement(x, y, 1, 2);
            let b = square_displacement(x, y, 2, 1);
            assert!((a + b).abs() < 1e-6, "expected antisymmetry, {a} vs {b}");
        }
    }

    #[test]
    fn square_vanishes_on_corners() {
        // X and Y hit 0 or 1 at the corners, where both cosine products agree.
        for &(x, y) in &[(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            assert!(square_displacement(x, y, 2, 5).abs() < 1e-6);
        }
    }

    #[test]
    fn circle_outside_disc_is_exactly_zero() {
        for &(x, y) in &[(1.1, 0.0), (0.8, 0.8), (-2.0, 0.5)] {
            assert_eq!(circle_displacement(x, y, 3, 2), 0.0);
        }
    }

    #[test]
    fn circle_center_matches_damped_amplitude() {
        // r = 0: cos(mθ)·cos(0)·exp(0) = 1 regardless of θ handling.
        assert!((circle_displacement(0.0, 0.0, 0, 1) - 1.0).abs() < 1e-6);
        assert!((circle_displacement(0.0, 0.0, 5, 3) - 1.0).abs() < 1e-6);
    }
}
