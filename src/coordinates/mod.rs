//! # Coordinate systems and the transform graph
//!
//! Plain value types for the coordinate representations used by the crate,
//! and the stateless conversions between them:
//!
//! ```text
//! Equatorial ⇄ Cartesian → Geographic
//!      ↑           ↓
//!  Ecliptic    Horizontal (needs an observer and an instant)
//!
//! Keplerian → Perifocal
//! Keplerian → heliocentric Cartesian
//! ```
//!
//! Every transform constructs a **new** value; nothing is mutated in place.
//! Transforms that relate an Earth-fixed and an inertial frame take an
//! [`Instant`](crate::time::Instant) for the sidereal time; the
//! ecliptic/equatorial rotation uses the obliquity carried by the
//! [`Ecliptic`] value (bound at construction from an explicitly supplied
//! instant or angle).
//!
//! ## Units & Conventions
//! -----------------
//! - Angles are **degrees** at the API surface.
//! - Geocentric Cartesian positions and geographic altitudes are
//!   **kilometers**; the great-circle distances on the ellipsoid
//!   ([`Geographic::distance_haversine`], [`Geographic::distance_vincenty`])
//!   are **meters**.
//! - Azimuth is measured from north through east, `[0, 360)`.

pub mod cartesian;
pub mod ecliptic;
pub mod equatorial;
pub mod geographic;
pub mod horizontal;
pub mod keplerian;
pub mod perifocal;

pub use cartesian::Cartesian;
pub use ecliptic::Ecliptic;
pub use equatorial::Equatorial;
pub use geographic::Geographic;
pub use horizontal::Horizontal;
pub use keplerian::Keplerian;
pub use perifocal::Perifocal;
