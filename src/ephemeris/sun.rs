//! Apparent position of the Sun.
//!
//! The model evaluates the Duffett-Smith low-order polynomials in Julian
//! centuries since [`J1900`] for the mean ecliptic longitude, the longitude
//! of perigee and the orbital eccentricity, then solves Kepler's equation
//! for the true anomaly through the crate solver. Accuracy is at the
//! arcminute level, adequate for ephemeris-grade work.

use crate::constants::{Degree, JulianDay, Kilometer, DAYS_PER_CENTURY, J1900, RADEG};
use crate::coordinates::Ecliptic;
use crate::errors::AstroError;
use crate::kepler::{true_anomaly, wrap_degrees};
use crate::time::{obliquity, Instant};

/// Orbital state of the Sun at one instant: an explicit snapshot, computed
/// fresh for every query, never shared or mutated between calls.
///
/// The Moon's perturbation series consumes `mean_anomaly` and
/// `ecliptic_longitude`; callers wanting the full apparent position use
/// [`Sun::position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    /// Mean anomaly `M = εg − ϖg` in degrees `[0, 360)`.
    pub mean_anomaly: Degree,
    /// Eccentricity of the Sun–Earth orbit at the instant.
    pub eccentricity: f64,
    /// Longitude of perigee `ϖg` in degrees.
    pub longitude_of_perigee: Degree,
    /// True anomaly `ν` in degrees `[0, 360)`.
    pub true_anomaly: Degree,
    /// Geocentric ecliptic longitude of date `λ = ν + ϖg` in degrees.
    pub ecliptic_longitude: Degree,
    /// Earth–Sun distance in kilometers.
    pub distance: Kilometer,
}

/// The Sun as a position provider.
pub struct Sun;

impl Sun {
    /// Mean Sun–Earth distance `r0` in kilometers.
    pub const MEAN_DISTANCE: Kilometer = 1.495985e8;

    /// Orbital state of the Sun at `at`.
    pub fn state(at: &Instant) -> Result<SunState, AstroError> {
        Sun::state_at(at.julian_date())
    }

    /// Orbital state of the Sun at a Julian Date.
    pub(crate) fn state_at(jd: JulianDay) -> Result<SunState, AstroError> {
        let t = (jd - J1900) / DAYS_PER_CENTURY;

        // Mean ecliptic longitude and longitude of perigee, degrees
        let mean_longitude = wrap_degrees(279.6966778 + 36000.76892 * t + 0.0003025 * t * t);
        let perigee_longitude = wrap_degrees(281.2208444 + 1.719175 * t + 0.000452778 * t * t);

        // Eccentricity of the Sun–Earth orbit
        let eccentricity = 0.01675104 - 0.0000418 * t - 0.000000126 * t * t;

        let mean_anomaly = wrap_degrees(mean_longitude - perigee_longitude);
        let nu = true_anomaly(mean_anomaly, eccentricity)?;

        // Conic relation r = r0·(1−e²)/(1 + e·cos ν)
        let f = (1.0 + eccentricity * (nu * RADEG).cos()) / (1.0 - eccentricity * eccentricity);
        let distance = Sun::MEAN_DISTANCE / f;

        Ok(SunState {
            mean_anomaly,
            eccentricity,
            longitude_of_perigee: perigee_longitude,
            true_anomaly: nu,
            ecliptic_longitude: wrap_degrees(nu + perigee_longitude),
            distance,
        })
    }

    /// Apparent geocentric ecliptic position of the Sun at `at`.
    ///
    /// Latitude is zero (the model is planar); distance is in kilometers;
    /// the obliquity carried by the returned [`Ecliptic`] is that of `at`.
    pub fn position(at: &Instant) -> Result<Ecliptic, AstroError> {
        let state = Sun::state(at)?;
        Ok(Ecliptic::new(
            state.ecliptic_longitude,
            0.0,
            state.distance,
            obliquity(at.julian_date()),
        ))
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sun_position() {
        // 1988 July 27, 0h UT
        let at = Instant::from_julian_date(2447369.5);
        let ecliptic = Sun::position(&at).unwrap();

        assert_abs_diff_eq!(ecliptic.longitude, 124.18695503565735, epsilon = 1e-8);
        assert_eq!(ecliptic.latitude, 0.0);
        // Late July is near aphelion: just over 1.015 AU.
        assert_relative_eq!(ecliptic.distance, 151920130.15065083, epsilon = 1e-9);
    }

    #[test]
    fn test_sun_state_snapshot() {
        let at = Instant::from_julian_date(2447369.5);
        let state = Sun::state(&at).unwrap();

        assert_abs_diff_eq!(state.mean_anomaly, 202.15154647903057, epsilon = 1e-8);
        assert!(state.eccentricity > 0.016 && state.eccentricity < 0.0168);
        // Two queries at the same instant are identical: no hidden state.
        assert_eq!(state, Sun::state(&at).unwrap());
    }

    #[test]
    fn test_sun_distance_bounds() {
        // Over a year the distance stays between perihelion and aphelion.
        for month in 1..=12u8 {
            let at = Instant::from_gregorian_utc(2020, month, 15, 0, 0, 0, 0);
            let state = Sun::state(&at).unwrap();
            assert!(state.distance > 1.45e8 && state.distance < 1.53e8);
        }
    }
}
