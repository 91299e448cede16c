//! Perifocal coordinate frame.

use nalgebra::Vector3;

/// Orthonormal basis of the perifocal frame of an orbit.
///
/// `p` points toward periapsis, `q` lies in the orbital plane at true
/// anomaly 90° past periapsis, and `w = p × q` is along the angular-momentum
/// vector, orthogonal to the plane of the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perifocal {
    /// Unit vector directed toward periapsis.
    pub p: Vector3<f64>,
    /// Unit vector at true anomaly 90° past periapsis.
    pub q: Vector3<f64>,
    /// Unit vector along the orbital angular momentum.
    pub w: Vector3<f64>,
}

impl Perifocal {
    pub fn new(p: Vector3<f64>, q: Vector3<f64>, w: Vector3<f64>) -> Self {
        Perifocal { p, q, w }
    }
}
