//! Equatorial geocentric Cartesian coordinates.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, RADEG, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::coordinates::{Equatorial, Geographic, Horizontal};
use crate::errors::AstroError;
use crate::time::Instant;

/// Convergence threshold of the geodetic-latitude refinement, radians.
const GEODETIC_TOLERANCE: f64 = 1e-4;

/// Defensive cap on the geodetic fixed-point iteration; the reference
/// behavior had none.
const GEODETIC_MAX_ITERATIONS: usize = 50;

/// Equatorial geocentric Cartesian coordinates in kilometers, x toward the
/// vernal equinox, z along the rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: Kilometer,
    pub y: Kilometer,
    pub z: Kilometer,
}

impl Cartesian {
    pub fn new(x: Kilometer, y: Kilometer, z: Kilometer) -> Self {
        Cartesian { x, y, z }
    }

    pub fn from_vector(v: Vector3<f64>) -> Self {
        Cartesian::new(v.x, v.y, v.z)
    }

    /// The position as an `nalgebra` vector.
    pub fn vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Length of the radius vector.
    pub fn radius(&self) -> Kilometer {
        self.vector().norm()
    }

    /// Geocentric equatorial polar coordinates of this position.
    ///
    /// Declination comes from `asin(z/Δ)` and round-trips exactly; right
    /// ascension uses the single-argument arctangent and therefore loses
    /// quadrant information – positions in quadrants II and III come back
    /// shifted by 180°.
    pub fn to_equatorial(&self) -> Equatorial {
        let distance = self.radius();
        if distance == 0.0 {
            return Equatorial::new(0.0, 0.0, 0.0);
        }

        let delta = (self.z / distance).asin().to_degrees();
        if self.x == 0.0 && self.y == 0.0 {
            // on the rotation axis: right ascension is undefined
            return Equatorial::new(0.0, delta, distance);
        }

        let mut alpha = (self.y / self.x).atan().to_degrees();
        if alpha < 0.0 {
            alpha += 360.0;
        }

        Equatorial::new(alpha, delta, distance)
    }

    /// Geodetic coordinates under this position at `at`.
    ///
    /// The longitude follows from the hour angle against Greenwich sidereal
    /// time; the geodetic latitude is refined by fixed-point iteration on
    /// the WGS84 ellipsoid (threshold 1e-4 rad). Exhausting the iteration
    /// cap surfaces [`AstroError::NonConvergence`] rather than a wrong
    /// latitude.
    pub fn to_geographic(&self, at: &Instant) -> Result<Geographic, AstroError> {
        let flattening = WGS84_FLATTENING;
        let semi_major = WGS84_SEMI_MAJOR_AXIS / 1000.0;
        let lst = at.gmst() * 15.0;

        let r = (self.x * self.x + self.y * self.y).sqrt();

        let mut longitude = self.y.atan2(self.x).to_degrees() - lst;
        longitude %= 360.0;
        if longitude < 0.0 {
            longitude += 360.0;
        }
        if longitude > 180.0 {
            longitude -= 360.0;
        }

        let e2 = flattening * (2.0 - flattening);
        let mut latitude = self.z.atan2(r);
        let mut c = 1.0;

        let mut converged = false;
        for _ in 0..GEODETIC_MAX_ITERATIONS {
            let previous = latitude;
            let sin_lat = previous.sin();
            c = 1.0 / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            latitude = (self.z + semi_major * c * e2 * sin_lat).atan2(r);
            if (latitude - previous).abs() <= GEODETIC_TOLERANCE {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(AstroError::NonConvergence {
                what: "geodetic latitude refinement",
                iterations: GEODETIC_MAX_ITERATIONS,
            });
        }

        let altitude = r / latitude.cos() - semi_major * c;

        Ok(Geographic::new(
            latitude.to_degrees(),
            longitude,
            altitude,
        ))
    }

    /// Topocentric azimuth and altitude of this position for an observer at
    /// `at`.
    ///
    /// The geocentric relative vector is rotated into the observer's
    /// south/east/zenith axes; azimuth is `atan2(−east, south)` rotated by
    /// 180°, normalized to `[0, 360)` and measured from north through east.
    pub fn to_horizontal(&self, at: &Instant, observer: &Geographic) -> Horizontal {
        let relative = self.vector() - observer.to_cartesian(at).vector();

        let phi = observer.latitude * RADEG;
        let theta = (at.gmst() * 15.0 + observer.longitude) * RADEG;

        let south = Vector3::new(
            phi.sin() * theta.cos(),
            phi.sin() * theta.sin(),
            -phi.cos(),
        );
        let east = Vector3::new(-theta.sin(), theta.cos(), 0.0);
        let zenith = Vector3::new(
            phi.cos() * theta.cos(),
            phi.cos() * theta.sin(),
            phi.sin(),
        );

        let rs = south.dot(&relative);
        let re = east.dot(&relative);
        let rz = zenith.dot(&relative);

        let range = relative.norm();
        // rounding can push the ratio a hair past ±1 for zenith targets
        let altitude = (rz / range).clamp(-1.0, 1.0).asin().to_degrees();
        let azimuth = ((-re).atan2(rs).to_degrees() + 180.0).rem_euclid(360.0);

        Horizontal::new(azimuth, altitude, Some(range))
    }
}
