use geo::{Distance, HaversineMeasure, Point};
use geonear_core::models::Coordinates;

/// Mean Earth radius used by the spherical model, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine on a sphere of [`EARTH_RADIUS_KM`]; distances come out in kilometers
const SPHERE: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_KM);

const HALF_CIRCUMFERENCE_KM: f64 = EARTH_RADIUS_KM * std::f64::consts::PI;

/// Great-circle distance between two coordinates in kilometers (haversine).
///
/// Works on anything implementing [`Coordinates`], so points and reference
/// locations can be mixed freely. The result is unrounded, symmetric in its
/// arguments, zero for identical positions, and finite and non-negative for
/// any in-range input.
pub fn distance_km(a: &impl Coordinates, b: &impl Coordinates) -> f64 {
    // Near the antipode the haversine term can round above 1 and asin yields NaN;
    // f64::min returns the other operand for NaN.
    SPHERE.distance(to_point(a), to_point(b)).min(HALF_CIRCUMFERENCE_KM)
}

fn to_point(c: &impl Coordinates) -> Point<f64> {
    Point::new(c.longitude(), c.latitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonear_core::models::{GeoPoint, Location};

    fn loc(latitude: f64, longitude: f64) -> Location {
        Location::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_same_point_is_zero() {
        let berlin = loc(52.52, 13.405);
        assert_eq!(distance_km(&berlin, &berlin), 0.0);
    }

    #[test]
    fn test_one_degree_on_equator() {
        let distance = distance_km(&loc(0.0, 0.0), &loc(0.0, 1.0));
        assert!((distance - 111.194_926_6).abs() < 1e-6, "got {}", distance);
    }

    #[test]
    fn test_paris_to_london() {
        let paris = loc(48.8566, 2.3522);
        let london = loc(51.5074, -0.1276);

        let distance = distance_km(&paris, &london);
        assert!(distance > 339.0 && distance < 349.0, "Paris-London {} should be ~344km", distance);
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let distance = distance_km(&loc(0.0, 0.0), &loc(0.0, 180.0));
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);

        let pole_to_pole = distance_km(&loc(90.0, 0.0), &loc(-90.0, 0.0));
        assert!(pole_to_pole.is_finite());
        assert!((pole_to_pole - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_pairs_are_finite() {
        for lat in [-60.0, -30.0, -1e-7, 12.345_678, 45.0, 89.999] {
            let d = distance_km(&loc(lat, 17.25), &loc(-lat, 17.25 - 180.0));
            assert!(d.is_finite(), "lat {} gave {}", lat, d);
            // asin is ill-conditioned here; within a metre is all that can be asked
            assert!((d - HALF_CIRCUMFERENCE_KM).abs() < 1e-3, "lat {} gave {}", lat, d);
        }
    }

    #[test]
    fn test_date_line_is_short() {
        let distance = distance_km(&loc(0.0, 179.5), &loc(0.0, -179.5));
        assert!((distance - 111.194_926_6).abs() < 1e-6, "got {}", distance);
    }

    #[test]
    fn test_matches_closed_form_haversine() {
        fn closed_form(a: Location, b: Location) -> f64 {
            let (phi1, phi2) = (a.latitude().to_radians(), b.latitude().to_radians());
            let d_phi = (b.latitude() - a.latitude()).to_radians();
            let d_lambda = (b.longitude() - a.longitude()).to_radians();
            let h = (d_phi / 2.0).sin().powi(2)
                + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
            2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
        }

        let pairs = [
            (loc(0.0, 0.0), loc(0.0, 1.0)),
            (loc(48.8566, 2.3522), loc(51.5074, -0.1276)),
            (loc(0.0, 179.5), loc(0.0, -179.5)),
            (loc(-33.8688, 151.2093), loc(40.7128, -74.006)),
            (loc(89.0, 10.0), loc(-60.0, -100.0)),
        ];
        for (a, b) in pairs {
            let ours = distance_km(&a, &b);
            let expected = closed_form(a, b);
            assert!((ours - expected).abs() < 1e-9, "{:?} -> {:?}: {} vs {}", a, b, ours, expected);
        }
    }

    #[test]
    fn test_mixed_point_and_location() {
        let point = GeoPoint::new("B", "Beta", 0.0, 1.0).unwrap();
        let reference = loc(0.0, 0.0);
        assert_eq!(distance_km(&reference, &point), distance_km(&point, &reference));
    }
}
