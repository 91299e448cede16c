use approx::{assert_abs_diff_eq, assert_relative_eq};

use astrokit::{Instant, Keplerian, KeplerOrbit, TleRecord};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn iss() -> KeplerOrbit {
    KeplerOrbit::from_tle(ISS_LINE1, ISS_LINE2).unwrap()
}

#[test]
fn test_orbit_geometry_from_tle() {
    let orbit = iss();

    assert_relative_eq!(orbit.semi_major_axis(), 6730.95819011945, epsilon = 1e-9);
    assert_relative_eq!(orbit.semi_minor_axis(), 6730.956678002489, epsilon = 1e-9);
    assert_relative_eq!(orbit.focal_distance(), 4.511761274591494, epsilon = 1e-6);
    assert_relative_eq!(orbit.semi_latus_rectum(), 6730.955165885867, epsilon = 1e-9);
    assert_relative_eq!(orbit.apoapsis_radius(), 6735.469951394286, epsilon = 1e-9);
    assert_relative_eq!(orbit.periapsis_radius(), 6726.4464288446125, epsilon = 1e-9);
}

#[test]
fn test_anomalies_from_tle() {
    let orbit = iss();

    assert_eq!(orbit.eccentric_anomaly().unwrap(), 325.00677531);
    assert_eq!(orbit.true_anomaly().unwrap(), 324.98474457);
    assert_relative_eq!(
        orbit.flight_path_angle().unwrap(),
        -0.0003844034207797706,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        orbit.time_since_periapsis().unwrap(),
        4961.875970359341,
        epsilon = 1e-6
    );
}

#[test]
fn test_velocity_at_apsides() {
    let orbit = iss();

    let v_periapsis = orbit.velocity(orbit.periapsis_radius());
    let v_apoapsis = orbit.velocity(orbit.apoapsis_radius());

    assert_relative_eq!(v_periapsis, 7.700542256140484, epsilon = 1e-9);
    // Periapsis is the fastest point of the orbit.
    assert!(v_periapsis > v_apoapsis);
    // Angular momentum r·v is conserved between the apsides, where the
    // velocity is purely tangential.
    assert_relative_eq!(
        orbit.periapsis_radius() * v_periapsis,
        orbit.apoapsis_radius() * v_apoapsis,
        epsilon = 1e-6
    );
}

#[test]
fn test_propagation_updates_mean_anomaly() {
    let mut orbit = iss();
    let one_hour_later = orbit.elements.epoch.plus_milliseconds(3_600_000.0);

    let propagated = orbit.propagate(&one_hour_later);

    assert_relative_eq!(propagated, 335.3270426876121, epsilon = 1e-6);
    assert_eq!(orbit.elements.mean_anomaly, propagated);
    // The parsed epoch value is untouched.
    assert_eq!(orbit.elements.mean_anomaly_at_epoch, 325.0288);

    // Propagating back to the epoch restores M0.
    let at_epoch = orbit.elements.epoch;
    assert_relative_eq!(orbit.propagate(&at_epoch), 325.0288, epsilon = 1e-9);
}

#[test]
fn test_cloned_orbits_propagate_independently() {
    let mut orbit = iss();
    let mut clone = orbit.clone();

    let later = orbit.elements.epoch.plus_milliseconds(7_200_000.0);
    orbit.propagate(&later);

    assert_eq!(clone.elements.mean_anomaly, 325.0288);
    clone.propagate(&later);
    assert_eq!(clone.elements.mean_anomaly, orbit.elements.mean_anomaly);
}

#[test]
fn test_tle_to_horizontal_pipeline() {
    let orbit = iss();
    let at = orbit.elements.epoch;

    // Element snapshot with the solved true anomaly, through the perifocal
    // and position conversions.
    let keplerian = Keplerian::from_orbit(&orbit).unwrap();
    assert_eq!(keplerian.true_anomaly, 324.98474457);

    let frame = keplerian.to_perifocal();
    assert_abs_diff_eq!(frame.w.norm(), 1.0, epsilon = 1e-12);
    // The orbit plane is tilted by the inclination: w·ẑ = cos i.
    assert_abs_diff_eq!(
        frame.w.z,
        (51.6416f64.to_radians()).cos(),
        epsilon = 1e-12
    );

    let position = keplerian.to_heliocentric();
    // The conic radius lies between the apsides.
    let radius = position.radius();
    assert!(radius > orbit.periapsis_radius() && radius < orbit.apoapsis_radius());

    // Equatorial/Cartesian round trip at the satellite's radius.
    let equatorial = position.to_equatorial();
    assert_relative_eq!(equatorial.distance, radius, epsilon = 1e-9);

    // Horizontal coordinates for a mid-latitude observer are well formed.
    let observer = astrokit::Geographic::new(48.8566, 2.3522, 0.0);
    let horizontal = position.to_horizontal(&at, &observer);
    assert!((0.0..360.0).contains(&horizontal.azimuth));
    assert!((-90.0..=90.0).contains(&horizontal.altitude));
    assert!(horizontal.distance.unwrap() > 0.0);
}

#[test]
fn test_subsatellite_point() {
    let orbit = iss();
    let at = orbit.elements.epoch;

    let keplerian = Keplerian::from_orbit(&orbit).unwrap();
    let geographic = keplerian.to_heliocentric().to_geographic(&at).unwrap();

    // The ground track of a 51.6°-inclination orbit stays within that
    // latitude band (geodetic latitude runs slightly above the geocentric
    // bound), and the altitude is a low-Earth-orbit altitude.
    assert!(geographic.latitude.abs() <= 52.0);
    assert!((-180.0..=180.0).contains(&geographic.longitude));
    assert!(geographic.altitude > 200.0 && geographic.altitude < 500.0);
}

#[test]
fn test_malformed_tle_is_rejected() {
    assert!(TleRecord::parse("", ISS_LINE2).is_err());

    let mut corrupted = String::from(ISS_LINE1);
    corrupted.replace_range(20..32, "abc.defghijk");
    assert!(TleRecord::parse(&corrupted, ISS_LINE2).is_err());
}

#[test]
fn test_epoch_pivot_year() {
    // Epoch year 57 is read as 1957 (Sputnik era), 56 as 2056.
    let mut line1 = String::from(ISS_LINE1);
    line1.replace_range(18..20, "57");
    let record = TleRecord::parse(&line1, ISS_LINE2).unwrap();
    assert_eq!(record.epoch_year, 1957);

    line1.replace_range(18..20, "56");
    let record = TleRecord::parse(&line1, ISS_LINE2).unwrap();
    assert_eq!(record.epoch_year, 2056);
}

#[test]
fn test_epoch_matches_calendar() {
    let record = TleRecord::parse(ISS_LINE1, ISS_LINE2).unwrap();
    let expected = Instant::from_gregorian_utc(2008, 9, 20, 12, 25, 40, 104);
    assert_eq!(record.epoch.gregorian_utc(), expected.gregorian_utc());
}
