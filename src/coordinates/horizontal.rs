//! Horizontal topocentric coordinates.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Kilometer};

/// Horizontal topocentric coordinates: azimuth `A`, altitude `a` in
/// degrees, optional slant range in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth in degrees from north through east, `[0, 360)`.
    pub azimuth: Degree,
    /// Altitude above the horizon in degrees, `[-90, 90]`.
    pub altitude: Degree,
    /// Slant range to the target in kilometers, when known.
    pub distance: Option<Kilometer>,
}

impl Horizontal {
    pub fn new(azimuth: Degree, altitude: Degree, distance: Option<Kilometer>) -> Self {
        Horizontal {
            azimuth,
            altitude,
            distance,
        }
    }

    /// True when the target is above the horizon.
    pub fn is_visible(&self) -> bool {
        self.altitude > 0.0
    }
}
