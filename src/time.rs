//! # Time scales and the [`Instant`] type
//!
//! Julian Date conversion, Greenwich sidereal time, obliquity of the
//! ecliptic and nutation in longitude. Every coordinate transform in the
//! crate that needs an epoch depends on this module.
//!
//! ## Overview
//! -----------------
//! - [`Instant`] wraps a [`hifitime::Epoch`] (the calendar provider) and
//!   exposes Julian Date, GMST, GST, obliquity and nutation as derived,
//!   read-only values. Nothing is cached: each accessor is a pure function
//!   of the wrapped epoch.
//! - The Gregorian ↔ Julian Date algorithms are implemented here, including
//!   the 1582 calendar cutover, rather than delegated to `hifitime`: the
//!   sidereal-time and ephemeris routines are calibrated against this exact
//!   arithmetic.
//!
//! ## Units & Conventions
//! -----------------
//! - Calendar fields are **UTC**.
//! - Sidereal times are **decimal hours** in `[0, 24)`.
//! - Obliquity and nutation are **degrees**.
//!
//! ## See also
//! ------------
//! * [`crate::ephemeris`] – Sun and Moon models driven by [`Instant`].
//! * [`crate::coordinates`] – transforms needing sidereal time or obliquity.

use hifitime::{Duration, Epoch, TimeScale};

use crate::constants::{
    Degree, Hour, JulianDay, DAYS_PER_CENTURY, GREGORIAN_EPOCH, J2000, RADEG, SIDEREAL_RATE,
};

/// A point in time, wrapping a [`hifitime::Epoch`].
///
/// All derived quantities (Julian Date, sidereal times, obliquity, nutation)
/// are recomputed on demand; an `Instant` carries no state besides the epoch
/// itself and is cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant(Epoch);

impl Instant {
    /// Wrap an existing `hifitime` epoch.
    pub fn from_epoch(epoch: Epoch) -> Self {
        Instant(epoch)
    }

    /// Build an instant from UTC Gregorian calendar fields.
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Self {
        Instant(Epoch::from_gregorian(
            year,
            month,
            day,
            hour,
            minute,
            second,
            u32::from(millisecond) * 1_000_000,
            TimeScale::UTC,
        ))
    }

    /// Build an instant from a Julian Date.
    ///
    /// Inverse of [`Instant::julian_date`], including the Julian/Gregorian
    /// calendar branch at JD 2299160. The result is exact to the
    /// millisecond.
    pub fn from_julian_date(jd: JulianDay) -> Self {
        let (year, month, day, hour, minute, second, millisecond) = jd_to_gregorian(jd);
        Instant::from_gregorian_utc(year, month, day, hour, minute, second, millisecond)
    }

    /// The wrapped `hifitime` epoch.
    pub fn epoch(&self) -> Epoch {
        self.0
    }

    /// UTC Gregorian calendar fields `(year, month, day, hour, minute,
    /// second, millisecond)` of this instant.
    pub fn gregorian_utc(&self) -> (i32, u8, u8, u8, u8, u8, u16) {
        let (year, month, day, hour, minute, second, nanos) = self.0.to_gregorian_utc();
        (
            year,
            month,
            day,
            hour,
            minute,
            second,
            (nanos / 1_000_000) as u16,
        )
    }

    /// Julian Date of this instant (UTC calendar fields).
    ///
    /// Standard Gregorian → Julian Date algorithm; the fractional day
    /// includes the time of day. Dates at or after 1582 October 15 carry the
    /// Gregorian correction term, earlier dates do not, and the year term
    /// uses `floor(365.25·y)` for `y ≥ 0` and `floor(365.25·y − 0.75)` for
    /// `y < 0`.
    pub fn julian_date(&self) -> JulianDay {
        let (year, month, day, hour, minute, second, millisecond) = self.gregorian_utc();
        gregorian_to_jd(year, month, day, hour, minute, second, millisecond)
    }

    /// Julian Date at 0h UT of this instant's UTC date.
    fn julian_date_0h(&self) -> JulianDay {
        let (year, month, day, ..) = self.gregorian_utc();
        gregorian_to_jd(year, month, day, 0, 0, 0, 0)
    }

    /// Greenwich Mean Sidereal Time in decimal hours `[0, 24)`.
    ///
    /// Computed in three steps:
    /// 1. GMST at 0h UT from the cubic polynomial in Julian centuries,
    /// 2. elapsed UTC seconds scaled by the sidereal rate 1.00273790925,
    /// 3. the equation-of-equinoxes correction
    ///    `(Δψ″ / 15) · cos ε` using [`obliquity`] and [`nutation`].
    pub fn gmst(&self) -> Hour {
        let t0 = (self.julian_date_0h() - J2000) / DAYS_PER_CENTURY;
        let mut gmst0 =
            (24110.5484 + 8640184.812866 * t0 + 0.093104 * t0 * t0 + 0.0000062 * t0.powi(3))
                / 3600.0;
        gmst0 = gmst0.rem_euclid(24.0);

        let (.., hour, minute, second, millisecond) = self.gregorian_utc();
        let tsec = f64::from(hour) * 3600.0
            + f64::from(minute) * 60.0
            + f64::from(second)
            + f64::from(millisecond) / 1000.0;
        let mut gmst = gmst0 + tsec * SIDEREAL_RATE / 3600.0;

        let jd = self.julian_date();
        let t = (jd - J2000) / DAYS_PER_CENTURY;
        let eps = obliquity(jd);
        let psi = nutation(jd);
        let long_sun = 280.4665 + 36000.7698 * t;
        let long_moon = 218.3165 + 481267.8813 * t;
        // Nutation in longitude, arcseconds (Meeus low-order series)
        let dpsi = -17.20 * (psi * RADEG).sin() + 1.32 * (2.0 * long_sun * RADEG).sin()
            - 0.23 * (2.0 * long_moon * RADEG).sin()
            + 0.21 * (2.0 * psi * RADEG).sin();
        gmst += (dpsi / 15.0) * (eps * RADEG).cos() / 3600.0;

        gmst.rem_euclid(24.0)
    }

    /// Greenwich Sidereal Time in decimal hours `[0, 24)`, from the plain
    /// (no-nutation) polynomial at 0h UT plus the elapsed UT scaled by the
    /// sidereal rate.
    pub fn gst(&self) -> Hour {
        let t = (self.julian_date_0h() - J2000) / DAYS_PER_CENTURY;
        let t0 = (6.697374558 + 2400.051336 * t + 0.000025862 * t * t).rem_euclid(24.0);

        let (.., hour, minute, second, millisecond) = self.gregorian_utc();
        let ut = ((f64::from(millisecond) / 1000.0 + f64::from(second)) / 60.0
            + f64::from(minute))
            / 60.0
            + f64::from(hour);

        (t0 + ut * 1.002737909).rem_euclid(24.0)
    }

    /// Mean obliquity of the ecliptic at this instant, in degrees.
    pub fn obliquity(&self) -> Degree {
        obliquity(self.julian_date())
    }

    /// Longitude of the Moon's ascending node at this instant, in degrees;
    /// the argument of the nutation correction applied in [`Instant::gmst`].
    pub fn nutation(&self) -> Degree {
        nutation(self.julian_date())
    }

    /// Elapsed seconds from `earlier` to this instant (negative if this
    /// instant precedes it).
    pub fn seconds_since(&self, earlier: &Instant) -> f64 {
        (self.0 - earlier.0).to_seconds()
    }

    /// This instant shifted by a number of milliseconds.
    pub fn plus_milliseconds(&self, milliseconds: f64) -> Self {
        Instant(self.0 + Duration::from_milliseconds(milliseconds))
    }
}

/// Gregorian calendar fields → Julian Date.
fn gregorian_to_jd(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
) -> JulianDay {
    let gregorian = (year, month, day) >= GREGORIAN_EPOCH;

    let mut y = f64::from(year);
    let mut m = f64::from(month);
    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let b = if gregorian {
        let a = (y / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    let c = if y < 0.0 {
        (365.25 * y - 0.75).floor()
    } else {
        (365.25 * y).floor()
    };

    let d_term = (30.6001 * (m + 1.0)).trunc();

    let day_fraction = f64::from(day)
        + f64::from(hour) / 24.0
        + f64::from(minute) / (24.0 * 60.0)
        + (f64::from(second) + f64::from(millisecond) / 1000.0) / (24.0 * 3600.0);

    b + c + d_term + day_fraction + 1720994.5
}

/// Julian Date → Gregorian calendar fields, millisecond precision.
fn jd_to_gregorian(jd: JulianDay) -> (i32, u8, u8, u8, u8, u8, u16) {
    let jd = jd + 0.5;
    let i = jd.trunc();
    let f = jd - i;

    // Gregorian correction applies past JD 2299160 (1582 October 15)
    let b = if i > 2299160.0 {
        let a = ((i - 1867216.25) / 36524.25).trunc();
        i + a - (a / 4.0).trunc() + 1.0
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).trunc();
    let e = (365.25 * d).trunc();
    let g = ((c - e) / 30.6001).trunc();

    let day_with_fraction = c - e + f - (30.6001 * g).trunc();

    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    let day = day_with_fraction.trunc();
    let mut fraction = day_with_fraction - day;
    fraction *= 24.0;
    let hour = fraction.trunc();
    fraction = (fraction - hour) * 60.0;
    let minute = fraction.trunc();
    fraction = (fraction - minute) * 60.0;
    let second = fraction.trunc();
    let millisecond = ((fraction - second) * 1000.0).trunc();

    (
        year as i32,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        second as u8,
        millisecond as u16,
    )
}

/// Mean obliquity of the ecliptic in degrees for a given Julian Date.
///
/// Duffett-Smith cubic in Julian centuries since J2000:
///
/// ```text
/// ε = 23.439292 − (46.815·T + 0.0006·T² − 0.00181·T³) / 3600
/// ```
pub fn obliquity(jd: JulianDay) -> Degree {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    23.439292 - (46.815 * t + 0.0006 * t * t - 0.00181 * t.powi(3)) / 3600.0
}

/// Longitude of the Moon's mean ascending node in degrees for a given
/// Julian Date, the principal argument of nutation in longitude.
pub fn nutation(jd: JulianDay) -> Degree {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t.powi(3) / 450000.0
}
