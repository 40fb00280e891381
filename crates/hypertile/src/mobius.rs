//! Möbius transforms of the Poincaré disk.
//!
//! Purpose
//! - Represent disk isometries `f(z) = (a z + b) / (c z + d)` as 2×2 complex
//!   matrices `[a, b; c, d]` and provide the small composition algebra the
//!   orbit builder and the viewer need.
//!
//! Conventions
//! - `m1.compose(&m2)` (also `m1 * m2`) applies `m2` first, then `m1`.
//! - `translation(p) = [1, p; p̄, 1]` has determinant `1 − |p|²`, not 1. The
//!   map is what matters; matrices are compared projectively via
//!   `normalized()` / `approx_eq`. We never renormalize stored transforms, so
//!   floating point drift in long compositions is tolerated, not corrected.
//! - `inverse()` is the adjugate `[d, −b; −c, a]`, which equals the inverse
//!   map for any non-singular matrix (projectively).

use std::ops::Mul;

use crate::cfg::DEGENERATE_EPS;
use crate::complex::{checked_div, Complex, ONE, ORIGIN};
use crate::error::TilingError;

/// Fractional-linear map `z ↦ (a z + b) / (c z + d)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mobius {
    pub a: Complex,
    pub b: Complex,
    pub c: Complex,
    pub d: Complex,
}

impl Mobius {
    pub const IDENTITY: Mobius = Mobius {
        a: ONE,
        b: ORIGIN,
        c: ORIGIN,
        d: ONE,
    };

    #[inline]
    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Hyperbolic translation carrying the origin to `p` (requires `|p| < 1`).
    #[inline]
    pub fn translation(p: Complex) -> Self {
        Self::new(ONE, p, p.conj(), ONE)
    }

    /// Rotation about the origin by `theta`.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        let half = Complex::cis(theta / 2.0);
        Self::new(half, ORIGIN, ORIGIN, half.conj())
    }

    /// Rotation by `theta` about an arbitrary disk point:
    /// `T_center ∘ R(theta) ∘ T_center⁻¹`.
    pub fn rotation_about(center: Complex, theta: f64) -> Self {
        let t = Self::translation(center);
        t * Self::rotation(theta) * t.inverse()
    }

    /// Order-2 rotation (half-turn) about `center`.
    #[inline]
    pub fn half_turn_about(center: Complex) -> Self {
        Self::rotation_about(center, std::f64::consts::PI)
    }

    /// Apply the map without guarding the denominator.
    ///
    /// Valid disk isometries never hit a zero denominator inside the disk;
    /// use `try_apply` where inputs are not known to be well-formed.
    #[inline]
    pub fn apply(&self, z: Complex) -> Complex {
        (self.a * z + self.b) / (self.c * z + self.d)
    }

    /// Apply the map, reporting a numerically zero denominator.
    #[inline]
    pub fn try_apply(&self, z: Complex) -> Result<Complex, TilingError> {
        checked_div(self.a * z + self.b, self.c * z + self.d)
    }

    /// Matrix product `self · other`: apply `other`, then `self`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
    }

    /// Adjugate `[d, −b; −c, a]`; no determinant division.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(self.d, -self.b, -self.c, self.a)
    }

    #[inline]
    pub fn det(&self) -> Complex {
        self.a * self.d - self.b * self.c
    }

    /// Scale to unit determinant (up to an overall sign, which is not fixed here).
    pub fn normalized(&self) -> Result<Self, TilingError> {
        let s = self.det().sqrt();
        let modulus = s.norm();
        if !(modulus > DEGENERATE_EPS) {
            return Err(TilingError::DegenerateTransform { modulus });
        }
        Ok(Self::new(self.a / s, self.b / s, self.c / s, self.d / s))
    }

    /// Projective comparison: `self` and `other` represent the same map within `eps`
    /// (max coefficient distance after normalization, either sign).
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        let (Ok(m), Ok(n)) = (self.normalized(), other.normalized()) else {
            return false;
        };
        let dist = |sign: f64| {
            [
                (m.a - n.a * sign).norm(),
                (m.b - n.b * sign).norm(),
                (m.c - n.c * sign).norm(),
                (m.d - n.d * sign).norm(),
            ]
            .into_iter()
            .fold(0.0, f64::max)
        };
        dist(1.0) <= eps || dist(-1.0) <= eps
    }

    #[inline]
    pub fn coefficients(&self) -> [Complex; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Default for Mobius {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mobius {
    type Output = Mobius;
    #[inline]
    fn mul(self, rhs: Mobius) -> Self::Output {
        self.compose(&rhs)
    }
}

/// Hyperbolic midpoint of the geodesic segment `[u, v]`.
///
/// Conjugate so `u` goes to the origin (`v' = (v − u) / (1 − ū v)`), take the
/// midpoint of `[0, v']`, which is `v' / (1 + √(1 − |v'|²))`, and map back
/// with `z ↦ (z + u) / (1 + ū z)`.
pub fn hyperbolic_midpoint(u: Complex, v: Complex) -> Result<Complex, TilingError> {
    for z in [u, v] {
        let modulus = z.norm();
        if !(modulus < 1.0) {
            return Err(TilingError::OutsideDisk { modulus });
        }
    }
    let v_prime = checked_div(v - u, ONE - u.conj() * v)?;
    let r_sq = v_prime.norm_sqr();
    let mid_prime = v_prime / (1.0 + (1.0 - r_sq).sqrt());
    checked_div(mid_prime + u, ONE + u.conj() * mid_prime)
}

/// Hyperbolic distance between two disk points.
pub fn hyperbolic_distance(u: Complex, v: Complex) -> Result<f64, TilingError> {
    let w = checked_div(v - u, ONE - u.conj() * v)?;
    let r = w.norm();
    if !(r < 1.0) {
        return Err(TilingError::OutsideDisk { modulus: r });
    }
    Ok(2.0 * r.atanh())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{c, polar};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn random_disk_point<R: Rng>(rng: &mut R, r_max: f64) -> Complex {
        let r = r_max * rng.gen::<f64>().sqrt();
        polar(r, rng.gen_range(-PI..PI))
    }

    #[test]
    fn translation_carries_origin_to_point() {
        let p = c(0.3, -0.4);
        let img = Mobius::translation(p).apply(ORIGIN);
        assert!((img - p).norm() < 1e-12);
    }

    #[test]
    fn rotation_quarter_turn() {
        let z = Mobius::rotation(FRAC_PI_2).apply(c(0.5, 0.0));
        assert!((z - c(0.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn identity_is_neutral_exactly() {
        let m = Mobius::translation(c(0.2, 0.1)) * Mobius::rotation(0.7);
        assert_eq!(Mobius::identity().compose(&m), m);
        assert_eq!(m.compose(&Mobius::identity()), m);
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let m1 = Mobius::rotation(0.4);
        let m2 = Mobius::translation(c(0.1, 0.5));
        let z = c(-0.2, 0.3);
        let lhs = m1.compose(&m2).apply(z);
        let rhs = m1.apply(m2.apply(z));
        assert!((lhs - rhs).norm() < 1e-12);
    }

    #[test]
    fn inverse_undoes_randomized_transforms_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let m = Mobius::translation(random_disk_point(&mut rng, 0.9))
                * Mobius::rotation(rng.gen_range(-PI..PI))
                * Mobius::translation(random_disk_point(&mut rng, 0.9));
            let z = random_disk_point(&mut rng, 0.95);
            let back = m.compose(&m.inverse()).apply(z);
            assert!((back - z).norm() < 1e-9);
            assert!(m.compose(&m.inverse()).approx_eq(&Mobius::IDENTITY, 1e-9));
        }
    }

    #[test]
    fn disk_isometries_preserve_unit_disk() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = Mobius::rotation_about(c(0.4, 0.2), 1.1) * Mobius::translation(c(-0.5, 0.1));
        for _ in 0..100 {
            let z = random_disk_point(&mut rng, 0.99);
            assert!(m.apply(z).norm() < 1.0);
        }
    }

    #[test]
    fn half_turn_fixes_center_and_squares_to_identity() {
        let m = c(0.25, -0.1);
        let h = Mobius::half_turn_about(m);
        assert!((h.apply(m) - m).norm() < 1e-12);
        assert!((h * h).approx_eq(&Mobius::IDENTITY, 1e-12));
        // As a matrix the square is a negative multiple of the identity.
        let sq = (h * h).normalized().unwrap();
        assert!((sq.a + ONE).norm() < 1e-12);
    }

    #[test]
    fn translation_determinant_and_normalization() {
        let p = c(0.6, 0.0);
        let t = Mobius::translation(p);
        assert!((t.det() - c(0.64, 0.0)).norm() < 1e-12);
        let n = t.normalized().unwrap();
        assert!((n.det() - ONE).norm() < 1e-12);
        assert!(n.approx_eq(&t, 1e-12));
    }

    #[test]
    fn singular_matrix_is_degenerate() {
        let m = Mobius::new(ONE, ONE, ONE, ONE);
        assert!(matches!(
            m.normalized(),
            Err(TilingError::DegenerateTransform { .. })
        ));
        let zero_den = Mobius::new(ONE, ORIGIN, ONE, ORIGIN);
        assert!(zero_den.try_apply(ORIGIN).is_err());
    }

    #[test]
    fn midpoint_on_diameter_matches_closed_form() {
        let v = c(0.5, 0.0);
        let m = hyperbolic_midpoint(ORIGIN, v).unwrap();
        let expected = 0.5 / (1.0 + (1.0f64 - 0.25).sqrt());
        assert!((m - c(expected, 0.0)).norm() < 1e-12);
        let d0 = hyperbolic_distance(ORIGIN, m).unwrap();
        let d1 = hyperbolic_distance(m, v).unwrap();
        assert!((d0 - d1).abs() < 1e-12);
    }

    #[test]
    fn midpoint_is_equidistant_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let u = random_disk_point(&mut rng, 0.9);
            let v = random_disk_point(&mut rng, 0.9);
            let m = hyperbolic_midpoint(u, v).unwrap();
            let du = hyperbolic_distance(u, m).unwrap();
            let dv = hyperbolic_distance(m, v).unwrap();
            let duv = hyperbolic_distance(u, v).unwrap();
            assert!((du - dv).abs() < 1e-9);
            assert!((du + dv - duv).abs() < 1e-9);
        }
    }

    #[test]
    fn midpoint_rejects_points_outside_disk() {
        let err = hyperbolic_midpoint(ORIGIN, c(1.5, 0.0)).unwrap_err();
        assert!(matches!(err, TilingError::OutsideDisk { .. }));
    }
}
