//! Equatorial geocentric polar coordinates.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RADEG};
use crate::coordinates::Cartesian;

/// Equatorial geocentric polar coordinates: right ascension `α`,
/// declination `δ`, distance `Δ`.
///
/// The distance carries whatever length unit the producer used; the
/// satellite pipeline works in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in degrees.
    pub right_ascension: Degree,
    /// Declination in degrees.
    pub declination: Degree,
    /// Distance from the geocenter.
    pub distance: f64,
}

impl Equatorial {
    pub fn new(right_ascension: Degree, declination: Degree, distance: f64) -> Self {
        Equatorial {
            right_ascension,
            declination,
            distance,
        }
    }

    /// Equatorial geocentric Cartesian coordinates of this position.
    ///
    /// Standard spherical-to-Cartesian expansion; the output inherits the
    /// distance unit.
    pub fn to_cartesian(&self) -> Cartesian {
        let alpha = self.right_ascension * RADEG;
        let delta = self.declination * RADEG;

        Cartesian::new(
            self.distance * delta.cos() * alpha.cos(),
            self.distance * delta.cos() * alpha.sin(),
            self.distance * delta.sin(),
        )
    }
}
