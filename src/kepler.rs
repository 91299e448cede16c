//! # Kepler's-equation solver and elliptical orbit geometry
//!
//! The anomaly machinery works on **explicit `(M, e)` snapshots**: the free
//! functions [`eccentric_anomaly`] and [`true_anomaly`] take the mean
//! anomaly and eccentricity as arguments and share no state, so concurrent
//! callers and the Sun model can use the solver without touching an orbit
//! instance.
//!
//! [`KeplerOrbit`] owns a parsed [`TleRecord`] and derives the ellipse
//! geometry (semi-axes, apsides, semi-latus rectum), vis-viva velocity,
//! flight-path angle and time since periapsis. Its one mutating operation is
//! [`KeplerOrbit::propagate`], which advances the record's current mean
//! anomaly to a new instant; callers needing concurrent propagation from the
//! same base elements clone the orbit first.
//!
//! ## Units
//! -----------------
//! - Anomalies are **degrees** at the API surface, radians internally.
//! - Lengths are **kilometers**, speeds **km/s**, times **seconds**.
//!
//! ## Domain
//! -----------------
//! The solver covers the elliptical domain `0 ≤ e < 1` only; parabolic and
//! hyperbolic inputs are rejected with
//! [`AstroError::EccentricityOutOfRange`].

use crate::constants::{Degree, Kilometer, Radian, DPI, EARTH_MU_KM, RADEG, SECONDS_PER_DAY};
use crate::errors::AstroError;
use crate::time::Instant;
use crate::tle::TleRecord;

/// Newton–Raphson convergence threshold, degrees-equivalent.
const SOLVER_TOLERANCE: f64 = 1e-8;

/// Newton–Raphson iteration cap. For `e < 1` the iteration converges in
/// single-digit counts; on cap exhaustion the last iterate is returned.
const SOLVER_MAX_ITERATIONS: usize = 30;

/// Reduce an angle in degrees to `[0, 360)`.
pub(crate) fn wrap_degrees(angle: Degree) -> Degree {
    angle.rem_euclid(360.0)
}

/// Round to eight decimal digits, the solver's published precision.
fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

/// Solve Kepler's equation `E − e·sin E = M` for the eccentric anomaly.
///
/// Newton–Raphson iteration with initial guess `M` for `e < 0.8` and `π`
/// otherwise. The mean anomaly is wrapped into a full turn before solving,
/// so any finite input angle is accepted.
///
/// Arguments
/// -----------------
/// * `mean_anomaly` – Mean anomaly `M` in degrees.
/// * `eccentricity` – Orbit eccentricity, `0 ≤ e < 1`.
///
/// Return
/// ----------
/// * Eccentric anomaly `E` in degrees, rounded to eight decimals, or
///   [`AstroError::EccentricityOutOfRange`] outside the elliptical domain.
pub fn eccentric_anomaly(mean_anomaly: Degree, eccentricity: f64) -> Result<Degree, AstroError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(AstroError::EccentricityOutOfRange(eccentricity));
    }

    let m = DPI * (mean_anomaly / 360.0 - (mean_anomaly / 360.0).floor());

    let mut ecc_anomaly = if eccentricity < 0.8 {
        m
    } else {
        std::f64::consts::PI
    };
    let mut residual = ecc_anomaly - eccentricity * m.sin() - m;

    let mut iteration = 0;
    while residual.abs() > SOLVER_TOLERANCE && iteration < SOLVER_MAX_ITERATIONS {
        ecc_anomaly -= residual / (1.0 - eccentricity * ecc_anomaly.cos());
        residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - m;
        iteration += 1;
    }

    Ok(round8(ecc_anomaly.to_degrees()))
}

/// True anomaly `ν` in degrees `[0, 360)` from a mean anomaly and
/// eccentricity, via the eccentric anomaly:
///
/// ```text
/// ν = atan2(√(1−e²)·sin E, cos E − e)
/// ```
pub fn true_anomaly(mean_anomaly: Degree, eccentricity: f64) -> Result<Degree, AstroError> {
    let ecc_anomaly = eccentric_anomaly(mean_anomaly, eccentricity)? * RADEG;

    let fak = (1.0 - eccentricity * eccentricity).sqrt();
    let mut nu = (fak * ecc_anomaly.sin())
        .atan2(ecc_anomaly.cos() - eccentricity)
        .to_degrees();

    nu = round8(nu);
    if nu < 0.0 {
        nu += 360.0;
    }

    Ok(nu)
}

/// Kepler problem geometry for a satellite described by a two-line element
/// record.
///
/// The record's current mean anomaly is exclusively owned by this orbit:
/// [`KeplerOrbit::propagate`] is the only operation that writes it, and
/// every anomaly accessor reads it. See the module docs for the concurrency
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerOrbit {
    pub elements: TleRecord,
}

impl KeplerOrbit {
    /// Wrap a parsed element record.
    pub fn new(elements: TleRecord) -> Self {
        KeplerOrbit { elements }
    }

    /// Parse two TLE lines and wrap the result.
    pub fn from_tle(line1: &str, line2: &str) -> Result<Self, AstroError> {
        Ok(KeplerOrbit::new(TleRecord::parse(line1, line2)?))
    }

    /// Mean motion in radians per second.
    fn mean_motion_rad(&self) -> f64 {
        self.elements.mean_motion * DPI / SECONDS_PER_DAY
    }

    /// Semi-major axis in kilometers, from the mean motion and the
    /// geocentric gravitational parameter: `a = ∛(μ / n²)`.
    pub fn semi_major_axis(&self) -> Kilometer {
        let n = self.mean_motion_rad();
        (EARTH_MU_KM / (n * n)).cbrt()
    }

    /// Semi-minor axis `b = a·√(1−e²)` in kilometers.
    pub fn semi_minor_axis(&self) -> Kilometer {
        let a = self.semi_major_axis();
        let e = self.elements.eccentricity;
        a * (1.0 - e * e).sqrt()
    }

    /// Distance from the ellipse center to either focus, `c = √(a²−b²)`.
    pub fn focal_distance(&self) -> Kilometer {
        let a = self.semi_major_axis();
        let b = self.semi_minor_axis();
        (a * a - b * b).sqrt()
    }

    /// Semi-latus rectum `ℓ = a·(1−e²)` in kilometers.
    pub fn semi_latus_rectum(&self) -> Kilometer {
        let e = self.elements.eccentricity;
        self.semi_major_axis() * (1.0 - e * e)
    }

    /// Apoapsis radius `Ra = a·(1+e)` in kilometers.
    pub fn apoapsis_radius(&self) -> Kilometer {
        self.semi_major_axis() * (1.0 + self.elements.eccentricity)
    }

    /// Periapsis radius `Rp = a·(1−e)` in kilometers.
    pub fn periapsis_radius(&self) -> Kilometer {
        self.semi_major_axis() * (1.0 - self.elements.eccentricity)
    }

    /// Orbital speed in km/s at radius `r`, from the vis-viva equation
    /// `v = √(2μ/r − μ/a)`.
    pub fn velocity(&self, radius: Kilometer) -> f64 {
        let a = self.semi_major_axis();
        (2.0 * EARTH_MU_KM / radius - EARTH_MU_KM / a).sqrt()
    }

    /// Eccentric anomaly in degrees for the record's current mean anomaly.
    pub fn eccentric_anomaly(&self) -> Result<Degree, AstroError> {
        eccentric_anomaly(self.elements.mean_anomaly, self.elements.eccentricity)
    }

    /// True anomaly in degrees `[0, 360)` for the record's current mean
    /// anomaly.
    pub fn true_anomaly(&self) -> Result<Degree, AstroError> {
        true_anomaly(self.elements.mean_anomaly, self.elements.eccentricity)
    }

    /// Flight-path angle `γ = atan(e·sin ν / (1 + e·cos ν))` in radians.
    pub fn flight_path_angle(&self) -> Result<Radian, AstroError> {
        let e = self.elements.eccentricity;
        let nu = self.true_anomaly()? * RADEG;
        Ok((e * nu.sin() / (1.0 + e * nu.cos())).atan())
    }

    /// Time since periapsis passage in seconds, from Kepler's equation:
    /// `t = (E − e·sin E) / n` with `E` in radians and `n` in rad/s.
    pub fn time_since_periapsis(&self) -> Result<f64, AstroError> {
        let e = self.elements.eccentricity;
        let ecc_anomaly = self.eccentric_anomaly()? * RADEG;
        Ok((ecc_anomaly - e * ecc_anomaly.sin()) / self.mean_motion_rad())
    }

    /// Propagate the mean anomaly to `at` and store it as the record's
    /// current mean anomaly:
    ///
    /// ```text
    /// M = M0 + n · (Δt / T)
    /// ```
    ///
    /// where `Δt` is the elapsed seconds since the element epoch and `T` the
    /// orbital period. This is the single mutating operation of the orbit;
    /// subsequent anomaly queries use the updated value.
    pub fn propagate(&mut self, at: &Instant) -> Degree {
        let elapsed = at.seconds_since(&self.elements.epoch);
        let revolutions = elapsed / self.elements.period;
        let mean_anomaly =
            self.elements.mean_anomaly_at_epoch + self.elements.mean_motion * revolutions;

        self.elements.mean_anomaly = mean_anomaly;
        mean_anomaly
    }
}
