//! Geographic (geodetic) coordinates and great-circle distances.
//!
//! PLEASE NOTE: charts used in ocean navigation often use the opposite
//! notation, λ for longitude and φ for latitude. The convention here keeps
//! latitude first, matching the constructor order.

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Kilometer, Meter, EARTH_MEAN_RADIUS, RADEG, WGS84_FLATTENING,
    WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS,
};
use crate::coordinates::Cartesian;
use crate::errors::AstroError;
use crate::time::Instant;

/// Convergence threshold of the Vincenty inverse iteration, radians.
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Iteration cap of the Vincenty inverse; near-antipodal geometries exhaust
/// it and surface as [`AstroError::NonConvergence`].
const VINCENTY_MAX_ITERATIONS: usize = 100;

/// Geodetic position: latitude `λ`, longitude `φ` in degrees, altitude `h`
/// in kilometers above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geographic {
    /// Geodetic latitude in degrees, positive north.
    pub latitude: Degree,
    /// Longitude in degrees, positive east.
    pub longitude: Degree,
    /// Altitude above the ellipsoid in kilometers.
    pub altitude: Kilometer,
}

impl Geographic {
    pub fn new(latitude: Degree, longitude: Degree, altitude: Kilometer) -> Self {
        Geographic {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Initial great-circle bearing toward `other`, degrees from north
    /// through east, `[0, 360)`.
    pub fn bearing_to(&self, other: &Geographic) -> Degree {
        let lat1 = self.latitude * RADEG;
        let lat2 = other.latitude * RADEG;
        let delta_lon = (other.longitude - self.longitude) * RADEG;

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    /// Great-circle distance to `other` in meters, haversine formula on the
    /// volumetric mean radius (exact spherical).
    pub fn distance_haversine(&self, other: &Geographic) -> Meter {
        let lat1 = self.latitude * RADEG;
        let lat2 = other.latitude * RADEG;
        let delta_lat = (other.latitude - self.latitude) * RADEG;
        let delta_lon = (other.longitude - self.longitude) * RADEG;

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_MEAN_RADIUS * c
    }

    /// Geodesic distance to `other` in meters, Vincenty inverse formula on
    /// the WGS84 ellipsoid.
    ///
    /// Coincident points short-circuit to `0` through the `sin σ = 0`
    /// branch. Near-antipodal pairs make the λ iteration oscillate; after
    /// the cap the result is [`AstroError::NonConvergence`], never a
    /// silently wrong number.
    pub fn distance_vincenty(&self, other: &Geographic) -> Result<Meter, AstroError> {
        let a = WGS84_SEMI_MAJOR_AXIS;
        let b = WGS84_SEMI_MINOR_AXIS;
        let f = WGS84_FLATTENING;

        let l = (other.longitude - self.longitude) * RADEG;
        let u1 = ((1.0 - f) * (self.latitude * RADEG).tan()).atan();
        let u2 = ((1.0 - f) * (other.latitude * RADEG).tan()).atan();

        let (sin_u1, cos_u1) = (u1.sin(), u1.cos());
        let (sin_u2, cos_u2) = (u2.sin(), u2.cos());

        let mut lambda = l;
        let mut sin_sigma;
        let mut cos_sigma;
        let mut sigma;
        let mut cos_sq_alpha;
        let mut cos_2sigma_m;

        let mut iteration = 0;
        loop {
            let (sin_lambda, cos_lambda) = (lambda.sin(), lambda.cos());
            sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();

            if sin_sigma == 0.0 {
                // coincident points
                return Ok(0.0);
            }

            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            cos_2sigma_m = if cos_sq_alpha == 0.0 {
                // equatorial line
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - previous).abs() <= VINCENTY_TOLERANCE {
                break;
            }

            iteration += 1;
            if iteration >= VINCENTY_MAX_ITERATIONS {
                return Err(AstroError::NonConvergence {
                    what: "Vincenty inverse",
                    iterations: VINCENTY_MAX_ITERATIONS,
                });
            }
        }

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        Ok(b * big_a * (sigma - delta_sigma))
    }

    /// Equatorial geocentric Cartesian position of this site at `at`, in
    /// kilometers.
    ///
    /// WGS84 ellipsoidal model; the longitude is carried into right
    /// ascension through the local sidereal time.
    pub fn to_cartesian(&self, at: &Instant) -> Cartesian {
        let phi = self.latitude * RADEG;
        let theta = (at.gmst() * 15.0 + self.longitude) * RADEG;

        let f = WGS84_FLATTENING;
        let semi_major = WGS84_SEMI_MAJOR_AXIS / 1000.0;

        let sin_phi = phi.sin();
        let c = 1.0 / (1.0 + f * (f - 2.0) * sin_phi * sin_phi).sqrt();
        let s = (1.0 - f) * (1.0 - f) * c;

        Cartesian::new(
            semi_major * c * phi.cos() * theta.cos(),
            semi_major * c * phi.cos() * theta.sin(),
            semi_major * s * sin_phi,
        )
    }
}

#[cfg(test)]
mod geographic_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn paris() -> Geographic {
        Geographic::new(48.8566, 2.3522, 0.0)
    }

    fn new_york() -> Geographic {
        Geographic::new(40.7128, -74.0060, 0.0)
    }

    #[test]
    fn test_distance_haversine() {
        assert_relative_eq!(
            paris().distance_haversine(&new_york()),
            5837248.233589963,
            epsilon = 1e-6
        );
        assert_eq!(paris().distance_haversine(&paris()), 0.0);
    }

    #[test]
    fn test_distance_vincenty() {
        assert_relative_eq!(
            paris().distance_vincenty(&new_york()).unwrap(),
            5852935.291767212,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_vincenty_identical_points() {
        assert_eq!(paris().distance_vincenty(&paris()), Ok(0.0));
    }

    #[test]
    fn test_vincenty_antipodal() {
        let antipode = Geographic::new(-48.8566, 2.3522 - 180.0, 0.0);
        assert_eq!(
            paris().distance_vincenty(&antipode),
            Err(AstroError::NonConvergence {
                what: "Vincenty inverse",
                iterations: 100
            })
        );
    }

    #[test]
    fn test_vincenty_haversine_agreement() {
        // Ellipsoidal and spherical distances agree within half a percent.
        let v = paris().distance_vincenty(&new_york()).unwrap();
        let h = paris().distance_haversine(&new_york());
        assert!((v - h).abs() / v < 0.005);
    }

    #[test]
    fn test_bearing() {
        // Due north and due east from the equator.
        let origin = Geographic::new(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            origin.bearing_to(&Geographic::new(10.0, 0.0, 0.0)),
            0.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            origin.bearing_to(&Geographic::new(0.0, 10.0, 0.0)),
            90.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cartesian_round_trip() {
        // Latitude and longitude are recovered within the 1e-4 rad
        // refinement threshold (≈ 0.006°).
        let at = Instant::from_gregorian_utc(2008, 9, 20, 12, 25, 40, 0);
        for site in [paris(), new_york(), Geographic::new(-33.8688, 151.2093, 0.0)] {
            let back = site.to_cartesian(&at).to_geographic(&at).unwrap();
            assert_abs_diff_eq!(back.latitude, site.latitude, epsilon = 0.006);
            assert_abs_diff_eq!(back.longitude, site.longitude, epsilon = 0.006);
        }
    }
}
