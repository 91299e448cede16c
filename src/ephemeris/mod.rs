//! # Apparent positions of the Sun and Moon
//!
//! Closed-form, textbook-grade (Duffett-Smith class) models producing the
//! apparent **ecliptic position of date** at a given [`Instant`]:
//!
//! - [`Sun`] – low-order polynomials in Julian centuries since 1900 feed the
//!   crate's Kepler solver; latitude is zero by construction (planar model).
//! - [`Moon`] – multi-term perturbation series (evection, annual equation,
//!   equation of center, variation) that requires the Sun's simultaneous
//!   state; latitude and distance in kilometers come out of the spherical
//!   trigonometry with the lunar orbital inclination.
//!
//! Neither model iterates beyond the Sun's anomaly solution, so there are no
//! convergence failure modes here.
//!
//! [`Instant`]: crate::time::Instant

pub mod moon;
pub mod sun;

pub use moon::Moon;
pub use sun::{Sun, SunState};
