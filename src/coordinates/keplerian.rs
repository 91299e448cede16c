//! Classical (Keplerian) orbital elements as a coordinate representation.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Kilometer, RADEG};
use crate::coordinates::{Cartesian, Perifocal};
use crate::errors::AstroError;
use crate::kepler::KeplerOrbit;

/// Classical orbital elements `(e, a, i, Ω, ω, ν)` with angles in degrees
/// and the semi-major axis in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keplerian {
    /// Eccentricity.
    pub eccentricity: f64,
    /// Semi-major axis in kilometers.
    pub semi_major_axis: Kilometer,
    /// Inclination `i` in degrees.
    pub inclination: Degree,
    /// Right ascension of the ascending node `Ω` in degrees.
    pub ascending_node: Degree,
    /// Argument of periapsis `ω` in degrees.
    pub argument_of_periapsis: Degree,
    /// True anomaly `ν` in degrees.
    pub true_anomaly: Degree,
}

impl Keplerian {
    pub fn new(
        eccentricity: f64,
        semi_major_axis: Kilometer,
        inclination: Degree,
        ascending_node: Degree,
        argument_of_periapsis: Degree,
        true_anomaly: Degree,
    ) -> Self {
        Keplerian {
            eccentricity,
            semi_major_axis,
            inclination,
            ascending_node,
            argument_of_periapsis,
            true_anomaly,
        }
    }

    /// Snapshot the elements of a satellite orbit, solving for the true
    /// anomaly at the record's current mean anomaly.
    pub fn from_orbit(orbit: &KeplerOrbit) -> Result<Self, AstroError> {
        Ok(Keplerian::new(
            orbit.elements.eccentricity,
            orbit.semi_major_axis(),
            orbit.elements.inclination,
            orbit.elements.right_ascension,
            orbit.elements.argument_of_perigee,
            orbit.true_anomaly()?,
        ))
    }

    /// Orthonormal basis of the perifocal frame, from the direction-cosine
    /// decomposition of `(i, Ω, ω)`.
    pub fn to_perifocal(&self) -> Perifocal {
        let i = self.inclination * RADEG;
        let node = self.ascending_node * RADEG;
        let peri = self.argument_of_periapsis * RADEG;

        let p = Vector3::new(
            node.cos() * peri.cos() - node.sin() * i.cos() * peri.sin(),
            node.sin() * peri.cos() + node.cos() * i.cos() * peri.sin(),
            i.sin() * peri.sin(),
        );
        let q = Vector3::new(
            -node.cos() * peri.sin() - node.sin() * i.cos() * peri.cos(),
            -node.sin() * peri.sin() + node.cos() * i.cos() * peri.cos(),
            i.sin() * peri.cos(),
        );
        let w = Vector3::new(i.sin() * node.sin(), -i.sin() * node.cos(), i.cos());

        Perifocal::new(p, q, w)
    }

    /// Heliocentric (primary-centered) Cartesian position from the
    /// orbital-plane polar form and the three Euler rotation angles:
    ///
    /// ```text
    /// r = a·(1−e²) / (1 + e·cos ν)
    /// x = r·(cos Ω·cos(ω+ν) − sin Ω·cos i·sin(ω+ν))
    /// y = r·(sin Ω·cos(ω+ν) + cos Ω·cos i·sin(ω+ν))
    /// z = r·sin i·sin(ω+ν)
    /// ```
    pub fn to_heliocentric(&self) -> Cartesian {
        let e = self.eccentricity;
        let i = self.inclination * RADEG;
        let node = self.ascending_node * RADEG;
        let nu = self.true_anomaly * RADEG;
        let arg_lat = self.argument_of_periapsis * RADEG + nu;

        let r = self.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos());

        Cartesian::new(
            r * (node.cos() * arg_lat.cos() - node.sin() * i.cos() * arg_lat.sin()),
            r * (node.sin() * arg_lat.cos() + node.cos() * i.cos() * arg_lat.sin()),
            r * i.sin() * arg_lat.sin(),
        )
    }
}

#[cfg(test)]
mod keplerian_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_perifocal_basis_orthonormal() {
        let keplerian = Keplerian::new(0.1, 7000.0, 51.6, 247.5, 130.5, 40.0);
        let frame = keplerian.to_perifocal();

        assert_abs_diff_eq!(frame.p.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.q.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.w.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.p.dot(&frame.q), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.p.dot(&frame.w), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((frame.p.cross(&frame.q) - frame.w).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perifocal_equatorial_orbit() {
        // i = Ω = ω = 0: the perifocal frame coincides with the reference
        // axes.
        let frame = Keplerian::new(0.0, 7000.0, 0.0, 0.0, 0.0, 0.0).to_perifocal();
        assert_abs_diff_eq!((frame.p - Vector3::x()).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((frame.q - Vector3::y()).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((frame.w - Vector3::z()).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heliocentric_periapsis() {
        // At periapsis of an untilted orbit the position lies on +x at
        // distance a(1−e).
        let keplerian = Keplerian::new(0.2, 10000.0, 0.0, 0.0, 0.0, 0.0);
        let position = keplerian.to_heliocentric();
        assert_abs_diff_eq!(position.x, 8000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(position.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(position.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heliocentric_radius_matches_conic() {
        let keplerian = Keplerian::new(0.3, 25000.0, 28.5, 45.0, 60.0, 135.0);
        let expected = 25000.0 * (1.0 - 0.3f64 * 0.3)
            / (1.0 + 0.3 * (135.0 * RADEG).cos());
        assert_abs_diff_eq!(keplerian.to_heliocentric().radius(), expected, epsilon = 1e-9);
    }
}
