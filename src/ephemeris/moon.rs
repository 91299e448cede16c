//! Apparent position of the Moon.
//!
//! Duffett-Smith perturbation series on the epoch-2010.0 mean elements. The
//! corrections applied, in order: evection, annual equation, the third and
//! fourth correction terms, equation of center and variation; the node is
//! corrected by the annual term before the spherical-trigonometry step that
//! produces latitude and longitude of date. The series needs the Sun's mean
//! anomaly and ecliptic longitude at the same instant, so the Sun state is
//! computed internally first.

use crate::constants::{Degree, Kilometer, J2010, RADEG};
use crate::coordinates::Ecliptic;
use crate::errors::AstroError;
use crate::kepler::wrap_degrees;
use crate::ephemeris::sun::Sun;
use crate::time::{obliquity, Instant};

/// The Moon as a position provider.
pub struct Moon;

impl Moon {
    /// Mean longitude at the epoch 2010.0, degrees.
    pub const MEAN_LONGITUDE_EPOCH: Degree = 91.929336;

    /// Mean longitude of the perigee at the epoch 2010.0, degrees.
    pub const PERIGEE_LONGITUDE_EPOCH: Degree = 130.143076;

    /// Mean longitude of the ascending node at the epoch 2010.0, degrees.
    pub const NODE_LONGITUDE_EPOCH: Degree = 291.682547;

    /// Inclination of the lunar orbit, degrees.
    pub const INCLINATION: Degree = 5.145396;

    /// Eccentricity of the lunar orbit.
    pub const ECCENTRICITY: f64 = 0.0549;

    /// Semi-major axis of the lunar orbit, kilometers.
    pub const SEMI_MAJOR_AXIS: Kilometer = 384_401.0;

    /// Angular diameter `θ0` at distance equal to the semi-major axis,
    /// degrees.
    pub const ANGULAR_DIAMETER_EPOCH: Degree = 0.5181;

    /// Horizontal parallax `π0` at distance equal to the semi-major axis,
    /// degrees.
    pub const PARALLAX_EPOCH: Degree = 0.9507;

    /// Apparent geocentric ecliptic position of the Moon at `at`.
    ///
    /// Longitude and latitude are degrees of date, distance is kilometers;
    /// the obliquity carried by the returned [`Ecliptic`] is that of `at`.
    pub fn position(at: &Instant) -> Result<Ecliptic, AstroError> {
        let jd = at.julian_date();
        let sun = Sun::state_at(jd)?;

        // Days since the epoch 2010 January 0.0
        let days = jd - (J2010 - 0.5);

        let sin_deg = |x: Degree| (x * RADEG).sin();

        // Mean longitude, mean anomaly and mean node longitude
        let mean_longitude = wrap_degrees(13.1763966 * days + Moon::MEAN_LONGITUDE_EPOCH);
        let mean_anomaly = wrap_degrees(
            mean_longitude - 0.1114041 * days - Moon::PERIGEE_LONGITUDE_EPOCH,
        );
        let node = wrap_degrees(Moon::NODE_LONGITUDE_EPOCH - 0.0529539 * days);

        // Evection, annual equation and third correction
        let evection = 1.2739 * sin_deg(2.0 * (mean_longitude - sun.ecliptic_longitude) - mean_anomaly);
        let annual_equation = 0.1858 * sin_deg(sun.mean_anomaly);
        let a3 = 0.37 * sin_deg(sun.mean_anomaly);

        let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;

        // Equation of center and fourth correction
        let center_equation = 6.2886 * sin_deg(corrected_anomaly);
        let a4 = 0.214 * sin_deg(2.0 * corrected_anomaly);

        let corrected_longitude =
            mean_longitude + evection + center_equation - annual_equation + a4;

        // Variation
        let variation = 0.6583 * sin_deg(2.0 * (corrected_longitude - sun.ecliptic_longitude));
        let true_longitude = corrected_longitude + variation;

        // Corrected node and spherical combination with the orbit plane
        let corrected_node = node - 0.16 * sin_deg(sun.mean_anomaly);
        let arc = (true_longitude - corrected_node) * RADEG;
        let inclination = Moon::INCLINATION * RADEG;

        let y = arc.sin() * inclination.cos();
        let x = arc.cos();
        let longitude = wrap_degrees(y.atan2(x).to_degrees() + corrected_node);
        let latitude = (arc.sin() * inclination.sin()).asin().to_degrees();

        // Distance from the conic relation in the corrected anomaly
        let e = Moon::ECCENTRICITY;
        let distance = Moon::SEMI_MAJOR_AXIS * (1.0 - e * e)
            / (1.0 + e * ((corrected_anomaly + center_equation) * RADEG).cos());

        Ok(Ecliptic::new(longitude, latitude, distance, obliquity(jd)))
    }

    /// Apparent angular diameter in degrees at a geocentric distance in
    /// kilometers.
    pub fn angular_diameter(distance: Kilometer) -> Degree {
        Moon::ANGULAR_DIAMETER_EPOCH * Moon::SEMI_MAJOR_AXIS / distance
    }

    /// Equatorial horizontal parallax in degrees at a geocentric distance in
    /// kilometers.
    pub fn horizontal_parallax(distance: Kilometer) -> Degree {
        Moon::PARALLAX_EPOCH * Moon::SEMI_MAJOR_AXIS / distance
    }
}
