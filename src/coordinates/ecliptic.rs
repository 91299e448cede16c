//! Ecliptic geocentric polar coordinates.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RADEG};
use crate::coordinates::Equatorial;
use crate::time::Instant;

/// Ecliptic geocentric polar coordinates: longitude `λ`, latitude `β`,
/// distance `Δ`, plus the obliquity `ε` used when rotating into the
/// equatorial frame.
///
/// The obliquity is **bound at construction** – from an explicit angle
/// ([`Ecliptic::new`]) or from an explicitly supplied instant
/// ([`Ecliptic::of_date`]) – and is not recomputed by
/// [`Ecliptic::to_equatorial`]. The Sun and Moon models bind the obliquity
/// of the instant they were queried at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    /// Ecliptic longitude in degrees.
    pub longitude: Degree,
    /// Ecliptic latitude in degrees.
    pub latitude: Degree,
    /// Distance from the geocenter (kilometers in the ephemeris pipeline).
    pub distance: f64,
    /// Obliquity of the ecliptic in degrees, fixed at construction.
    pub obliquity: Degree,
}

impl Ecliptic {
    /// Build from an explicit obliquity.
    pub fn new(longitude: Degree, latitude: Degree, distance: f64, obliquity: Degree) -> Self {
        Ecliptic {
            longitude,
            latitude,
            distance,
            obliquity,
        }
    }

    /// Build with the obliquity of the ecliptic at `at`.
    pub fn of_date(longitude: Degree, latitude: Degree, distance: f64, at: &Instant) -> Self {
        Ecliptic::new(longitude, latitude, distance, at.obliquity())
    }

    /// Equatorial polar coordinates of this position, rotating by the
    /// stored obliquity:
    ///
    /// ```text
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
    /// ```
    pub fn to_equatorial(&self) -> Equatorial {
        let lambda = self.longitude * RADEG;
        let beta = self.latitude * RADEG;
        let eps = self.obliquity * RADEG;

        let sin_delta = beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin();
        let delta = sin_delta.asin().to_degrees();

        let y = lambda.sin() * eps.cos() - beta.tan() * eps.sin();
        let x = lambda.cos();
        let mut alpha = y.atan2(x).to_degrees();
        if alpha < 0.0 {
            alpha += 360.0;
        }

        Equatorial::new(alpha, delta, self.distance)
    }
}

#[cfg(test)]
mod ecliptic_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_to_equatorial() {
        let ecliptic = Ecliptic::new(139.686111, 4.875278, 0.0, 23.438055);
        let equatorial = ecliptic.to_equatorial();

        assert_abs_diff_eq!(equatorial.right_ascension, 143.72217252363424, epsilon = 1e-9);
        assert_abs_diff_eq!(equatorial.declination, 19.535003195629777, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_obliquity_is_identity() {
        let ecliptic = Ecliptic::new(123.4, 0.0, 2.0, 0.0);
        let equatorial = ecliptic.to_equatorial();
        assert_abs_diff_eq!(equatorial.right_ascension, 123.4, epsilon = 1e-9);
        assert_abs_diff_eq!(equatorial.declination, 0.0, epsilon = 1e-12);
        assert_eq!(equatorial.distance, 2.0);
    }

    #[test]
    fn test_of_date_binds_obliquity() {
        let at = Instant::from_julian_date(2455018.5);
        let ecliptic = Ecliptic::of_date(10.0, 5.0, 1.0, &at);
        assert_abs_diff_eq!(ecliptic.obliquity, 23.43805531, epsilon = 1e-8);
    }
}
