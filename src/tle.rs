//! # NORAD Two-Line Element parser
//!
//! Parses the fixed-width 69-character two-line element format into a typed
//! [`TleRecord`].
//!
//! ## Overview
//! -----------------
//! - A line-length guard rejects lines shorter than the required column
//!   range before any field is sliced.
//! - Every numeric field is extracted by **fixed columns** (0-indexed,
//!   end-exclusive) and parsed individually; failures surface as
//!   [`AstroError::InvalidTleField`] naming the field and carrying the
//!   offending slice.
//! - Checksums are extracted and exposed for caller-side verification but
//!   never enforced.
//!
//! ## Field layout (0-indexed, end-exclusive)
//! -----------------
//! Line 1: `2..7` catalog number, `7..8` classification, `9..17`
//! international designator, `18..20` epoch year (two digits, pivot 57),
//! `20..32` epoch day-of-year with fraction, `33..43` first derivative of
//! mean motion, `44..52` second derivative (implied-decimal `±NNNNN±E`),
//! `53..61` B* drag term (same encoding), `62..63` ephemeris type, `64..68`
//! element-set number, `68..69` checksum.
//!
//! Line 2: `8..16` inclination, `17..25` right ascension of the ascending
//! node, `26..33` eccentricity (leading `0.` implied), `34..42` argument of
//! perigee, `43..51` mean anomaly at epoch, `52..63` mean motion (rev/day),
//! `63..68` revolution number at epoch, `68..69` checksum.
//!
//! ## Units & Conventions
//! -----------------
//! - Angles in **degrees**, mean motion in **revolutions per day**.
//! - The derived orbital period is `86400 / n` **seconds**.
//! - The element epoch is day-of-year based: day 1.0 is January 1, 00:00:00
//!   UTC, so the epoch instant is December 31 of the preceding year plus the
//!   fractional day count, exact to the millisecond.

use std::ops::Range;

use crate::constants::{Degree, SECONDS_PER_DAY};
use crate::errors::AstroError;
use crate::time::Instant;

/// Minimum number of characters in each TLE line.
const MIN_LINE_LEN: usize = 69;

/// Two-digit epoch years below the pivot belong to the 2000s, the rest to
/// the 1900s.
const EPOCH_YEAR_PIVOT: i32 = 57;

/// A parsed two-line element set.
///
/// Immutable once parsed, except for `mean_anomaly`: that field holds the
/// **current** mean anomaly and is advanced by
/// [`KeplerOrbit::propagate`](crate::kepler::KeplerOrbit::propagate).
/// `mean_anomaly_at_epoch` keeps the parsed value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TleRecord {
    /// Satellite name from the optional leading name line.
    pub name: Option<String>,
    /// NORAD catalog number.
    pub satellite_number: u32,
    /// Security classification letter (`U` unclassified).
    pub classification: char,
    /// International designator (launch year, launch number, piece).
    pub international_designator: String,
    /// Four-digit epoch year, resolved from the two-digit field.
    pub epoch_year: i32,
    /// Day of the epoch year, with fraction; day 1.0 is January 1 00:00 UTC.
    pub epoch_day: f64,
    /// Element epoch as an [`Instant`].
    pub epoch: Instant,
    /// First derivative of mean motion (rev/day²) as printed.
    pub mean_motion_dot: f64,
    /// Second derivative of mean motion, decoded from the implied-decimal
    /// field.
    pub mean_motion_ddot: f64,
    /// B* drag term, decoded from mantissa × 10^exponent.
    pub bstar: f64,
    /// Ephemeris type digit.
    pub ephemeris_type: u8,
    /// Element-set number.
    pub element_number: u32,
    /// Orbital inclination `i` in degrees.
    pub inclination: Degree,
    /// Right ascension of the ascending node `Ω` in degrees.
    pub right_ascension: Degree,
    /// Eccentricity, decimal point implied.
    pub eccentricity: f64,
    /// Argument of perigee `ω` in degrees.
    pub argument_of_perigee: Degree,
    /// Mean anomaly at epoch `M0` in degrees.
    pub mean_anomaly_at_epoch: Degree,
    /// Current mean anomaly `M` in degrees; equals `M0` until propagated.
    pub mean_anomaly: Degree,
    /// Mean motion `n` in revolutions per day.
    pub mean_motion: f64,
    /// Revolution number at epoch.
    pub revolution_number: u32,
    /// Line 1 checksum digit, exposed for optional verification.
    pub checksum_line1: u8,
    /// Line 2 checksum digit, exposed for optional verification.
    pub checksum_line2: u8,
    /// Orbital period `T = 86400 / n` in seconds.
    pub period: f64,
}

impl TleRecord {
    /// Parse the two element lines.
    pub fn parse(line1: &str, line2: &str) -> Result<Self, AstroError> {
        if line1.len() < MIN_LINE_LEN {
            return Err(AstroError::TleLineTooShort {
                line: 1,
                length: line1.len(),
            });
        }
        if line2.len() < MIN_LINE_LEN {
            return Err(AstroError::TleLineTooShort {
                line: 2,
                length: line2.len(),
            });
        }

        let satellite_number = parse_field::<u32>(line1, 2..7, "satellite number")?;
        let classification = line1[7..8].chars().next().unwrap_or(' ');
        let international_designator = line1[9..17].trim().to_string();

        let raw_year = parse_field::<i32>(line1, 18..20, "epoch year")?;
        let epoch_year = if raw_year < EPOCH_YEAR_PIVOT {
            raw_year + 2000
        } else {
            raw_year + 1900
        };
        let epoch_day = parse_field::<f64>(line1, 20..32, "epoch day")?;

        let mean_motion_dot = parse_field::<f64>(line1, 33..43, "mean motion derivative")?;
        let mean_motion_ddot =
            parse_power_field(line1, 44..50, 50..52, "mean motion second derivative")?;
        let bstar = parse_power_field(line1, 53..59, 59..61, "bstar")?;

        let ephemeris_type = match line1[62..63].trim() {
            "" => 0,
            digit => parse_str::<u8>(digit, "ephemeris type")?,
        };
        let element_number = parse_field::<u32>(line1, 64..68, "element number")?;
        let checksum_line1 = parse_field::<u8>(line1, 68..69, "line 1 checksum")?;

        let inclination = parse_field::<f64>(line2, 8..16, "inclination")?;
        let right_ascension = parse_field::<f64>(line2, 17..25, "right ascension")?;
        // Decimal point implied: "0006703" reads as 0.0006703
        let eccentricity = parse_str::<f64>(
            &format!("0.{}", line2[26..33].trim()),
            "eccentricity",
        )?;
        let argument_of_perigee = parse_field::<f64>(line2, 34..42, "argument of perigee")?;
        let mean_anomaly_at_epoch = parse_field::<f64>(line2, 43..51, "mean anomaly")?;
        let mean_motion = parse_field::<f64>(line2, 52..63, "mean motion")?;
        let revolution_number = parse_field::<u32>(line2, 63..68, "revolution number")?;
        let checksum_line2 = parse_field::<u8>(line2, 68..69, "line 2 checksum")?;

        Ok(TleRecord {
            name: None,
            satellite_number,
            classification,
            international_designator,
            epoch_year,
            epoch_day,
            epoch: epoch_to_instant(epoch_year, epoch_day),
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            ephemeris_type,
            element_number,
            inclination,
            right_ascension,
            eccentricity,
            argument_of_perigee,
            mean_anomaly_at_epoch,
            mean_anomaly: mean_anomaly_at_epoch,
            mean_motion,
            revolution_number,
            checksum_line1,
            checksum_line2,
            period: SECONDS_PER_DAY / mean_motion,
        })
    }

    /// Parse a three-line entry: name line followed by the two element
    /// lines.
    pub fn parse_3le(name: &str, line1: &str, line2: &str) -> Result<Self, AstroError> {
        let mut record = TleRecord::parse(line1, line2)?;
        record.name = Some(name.trim().to_string());
        Ok(record)
    }
}

/// Convert a TLE epoch (four-digit year, fractional day of year) into an
/// [`Instant`]: December 31 of the preceding year, 00:00:00 UTC, plus the
/// fractional day count, truncated to the millisecond.
pub fn epoch_to_instant(year: i32, day_fraction: f64) -> Instant {
    let base = Instant::from_gregorian_utc(year - 1, 12, 31, 0, 0, 0, 0);
    let milliseconds = (day_fraction * SECONDS_PER_DAY * 1000.0).trunc();
    base.plus_milliseconds(milliseconds)
}

fn parse_str<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T, AstroError> {
    value.trim().parse::<T>().map_err(|_| AstroError::InvalidTleField {
        field,
        value: value.to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    columns: Range<usize>,
    field: &'static str,
) -> Result<T, AstroError> {
    parse_str(&line[columns], field)
}

/// Decode the implied-decimal `±NNNNN±E` encoding shared by the B* and
/// second-derivative fields: a five-digit signed mantissa scaled by 1e-5,
/// times ten to a signed one-digit exponent.
fn parse_power_field(
    line: &str,
    mantissa_columns: Range<usize>,
    exponent_columns: Range<usize>,
    field: &'static str,
) -> Result<f64, AstroError> {
    let mantissa = parse_field::<f64>(line, mantissa_columns, field)? * 1e-5;
    let exponent = parse_field::<f64>(line, exponent_columns, field)?;
    Ok(mantissa * 10f64.powf(exponent))
}

#[cfg(test)]
mod tle_test {
    use super::*;
    use approx::assert_relative_eq;

    const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_parse_iss() {
        let record = TleRecord::parse(ISS_LINE1, ISS_LINE2).unwrap();

        assert_eq!(record.satellite_number, 25544);
        assert_eq!(record.classification, 'U');
        assert_eq!(record.international_designator, "98067A");
        assert_eq!(record.epoch_year, 2008);
        assert_eq!(record.epoch_day, 264.51782528);
        assert_eq!(record.mean_motion_dot, -0.00002182);
        assert_eq!(record.mean_motion_ddot, 0.0);
        assert_relative_eq!(record.bstar, -1.1606e-5, epsilon = 1e-12);
        assert_eq!(record.ephemeris_type, 0);
        assert_eq!(record.element_number, 292);
        assert_eq!(record.checksum_line1, 7);

        assert_eq!(record.inclination, 51.6416);
        assert_eq!(record.right_ascension, 247.4627);
        assert_eq!(record.eccentricity, 0.0006703);
        assert_eq!(record.argument_of_perigee, 130.5360);
        assert_eq!(record.mean_anomaly_at_epoch, 325.0288);
        assert_eq!(record.mean_anomaly, 325.0288);
        assert_eq!(record.mean_motion, 15.72125391);
        assert_eq!(record.revolution_number, 56353);
        assert_eq!(record.checksum_line2, 7);

        assert_relative_eq!(record.period, 5495.744836551654, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_3le() {
        let record = TleRecord::parse_3le("ISS (ZARYA)", ISS_LINE1, ISS_LINE2).unwrap();
        assert_eq!(record.name.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn test_epoch_instant() {
        let record = TleRecord::parse(ISS_LINE1, ISS_LINE2).unwrap();
        let (year, month, day, hour, minute, second, millisecond) =
            record.epoch.gregorian_utc();
        assert_eq!((year, month, day), (2008, 9, 20));
        assert_eq!((hour, minute, second), (12, 25, 40));
        assert_eq!(millisecond, 104);
    }

    #[test]
    fn test_epoch_to_instant() {
        // Day-of-year 45.08461514 of 2016 lands on February 14, 02:01:50.748.
        let instant = epoch_to_instant(2016, 45.08461514);
        let (year, month, day, hour, minute, second, millisecond) = instant.gregorian_utc();
        assert_eq!((year, month, day), (2016, 2, 14));
        assert_eq!((hour, minute, second), (2, 1, 50));
        assert_eq!(millisecond, 748);

        // Day 1.0 is January 1, 00:00:00 UTC.
        let instant = epoch_to_instant(2020, 1.0);
        let (year, month, day, hour, minute, second, _) = instant.gregorian_utc();
        assert_eq!((year, month, day, hour, minute, second), (2020, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_line_too_short() {
        assert_eq!(
            TleRecord::parse("1 25544U", ISS_LINE2),
            Err(AstroError::TleLineTooShort { line: 1, length: 8 })
        );
        assert_eq!(
            TleRecord::parse(ISS_LINE1, "2 25544"),
            Err(AstroError::TleLineTooShort { line: 2, length: 7 })
        );
    }

    #[test]
    fn test_invalid_field() {
        let mut corrupted = String::from(ISS_LINE2);
        corrupted.replace_range(52..63, "xx.xxxxxxxx");
        let err = TleRecord::parse(ISS_LINE1, &corrupted).unwrap_err();
        assert!(matches!(
            err,
            AstroError::InvalidTleField { field: "mean motion", .. }
        ));
    }
}
