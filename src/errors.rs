use thiserror::Error;

/// Crate-wide error type.
///
/// Variants
/// -----------------
/// * `TleLineTooShort` – A TLE line does not reach the minimum column range.
/// * `InvalidTleField` – A required TLE numeric field failed to parse; the
///   payload names the field and carries the offending slice.
/// * `EccentricityOutOfRange` – The Kepler solver requires `0 ≤ e < 1`;
///   parabolic and hyperbolic orbits are out of scope.
/// * `NonConvergence` – An iterative computation (geodetic latitude
///   refinement, Vincenty inverse) exhausted its iteration cap. Surfaced as
///   a result value rather than a substituted number: for Vincenty this is
///   the expected outcome for near-antipodal points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("TLE line {line} is too short: {length} characters")]
    TleLineTooShort { line: u8, length: usize },

    #[error("invalid TLE field `{field}`: {value:?}")]
    InvalidTleField { field: &'static str, value: String },

    #[error("eccentricity {0} outside the elliptical domain [0, 1)")]
    EccentricityOutOfRange(f64),

    #[error("{what} did not converge within {iterations} iterations")]
    NonConvergence {
        what: &'static str,
        iterations: usize,
    },
}
