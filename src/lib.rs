//! # astrokit
//!
//! Ephemeris-grade positions of the Sun, the Moon and Earth satellites,
//! with conversions between the astronomical coordinate systems and time
//! scales involved.
//!
//! Satellite flow: TLE text → [`TleRecord`] → [`KeplerOrbit`] → equatorial
//! or Cartesian coordinates → horizontal/geographic for an observer.
//! Independently, [`Instant`] plus [`Sun`]/[`Moon`] produce an ecliptic
//! position convertible to equatorial and horizontal frames.
//!
//! The models are textbook-grade (Duffett-Smith class) closed-form series;
//! this is not a numerical propagator and carries no SGP4/SDP4.

pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod errors;
pub mod kepler;
pub mod time;
pub mod tle;

pub use coordinates::{
    Cartesian, Ecliptic, Equatorial, Geographic, Horizontal, Keplerian, Perifocal,
};
pub use ephemeris::{Moon, Sun, SunState};
pub use errors::AstroError;
pub use kepler::{eccentric_anomaly, true_anomaly, KeplerOrbit};
pub use time::{nutation, obliquity, Instant};
pub use tle::TleRecord;
