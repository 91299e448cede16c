//! # Constants and type definitions for astrokit
//!
//! This module centralizes the **physical constants**, **named epochs**, and
//! **common type definitions** used throughout the crate. It is the read-only
//! constants provider consumed by the time, orbit and coordinate modules:
//! every constant documents its unit, and consumers never perform unit
//! conversions of their own.
//!
//! ## Overview
//!
//! - Angle and time conversion factors (degrees ↔ radians, days ↔ seconds)
//! - Earth geodesy (WGS84 ellipsoid) and gravitational parameters
//! - Named Julian-date epochs (J1900, J2000, J2010, J2100)
//! - Type aliases making units explicit in signatures

// -------------------------------------------------------------------------------------------------
// Conversion factors
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Ratio of the solar day to the sidereal day, used when converting elapsed
/// UT into elapsed sidereal time
pub const SIDEREAL_RATE: f64 = 1.00273790925;

// -------------------------------------------------------------------------------------------------
// Named epochs (Julian Date)
// -------------------------------------------------------------------------------------------------

/// JD of the epoch 1900 January 0.5
pub const J1900: JulianDay = 2415020.0;

/// JD of the standard epoch J2000.0 (2000-01-01 12:00)
pub const J2000: JulianDay = 2451545.0;

/// JD of the epoch 2010 January 0.5
pub const J2010: JulianDay = 2455197.0;

/// JD of the epoch 2100 January 0.5
pub const J2100: JulianDay = 2488070.0;

/// Start of the Gregorian calendar, 1582 October 15, as (year, month, day).
/// Calendar dates at or after this one carry the Gregorian correction term
/// in the Julian Date conversion; earlier dates do not.
pub const GREGORIAN_EPOCH: (i32, u8, u8) = (1582, 10, 15);

// -------------------------------------------------------------------------------------------------
// Earth and WGS84 geodesy
// -------------------------------------------------------------------------------------------------

/// WGS84 semi-major axis in meters
pub const WGS84_SEMI_MAJOR_AXIS: Meter = 6_378_137.0;

/// WGS84 semi-minor (polar) axis in meters
pub const WGS84_SEMI_MINOR_AXIS: Meter = 6_356_752.3142;

/// WGS84 flattening factor of the Earth (unitless)
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// WGS84 nominal mean angular velocity of the Earth in radians per second
pub const WGS84_ROTATION_RATE: f64 = 7292115e-11;

/// Geocentric gravitational constant μ = GM in m³/s² (WGS84)
pub const WGS84_MU: f64 = 3986004.418e8;

/// Geocentric gravitational constant μ in km³/s², the scale used by the
/// Kepler-orbit geometry (semi-major axes in kilometers)
pub const EARTH_MU_KM: f64 = 398_600.0;

/// Earth volumetric mean radius in meters
pub const EARTH_MEAN_RADIUS: Meter = 6_371_008.0;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.97219e24;

/// Astronomical Unit in meters
pub const AU: Meter = 149_597_870_700.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Time of day or sidereal time in decimal hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Date (days)
pub type JulianDay = f64;
