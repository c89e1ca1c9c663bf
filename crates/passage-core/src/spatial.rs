//! Spatial math for route distance calculations.

/// Earth's mean radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Calculate great-circle distance between two points in nautical miles
/// using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in nautical miles. Out-of-range degrees are not validated;
/// callers are expected to supply valid coordinates.
pub fn haversine_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude is 60 nm by definition
        let dist = haversine_nm(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 60.0).abs() < 0.1, "expected ~60 nm, got {dist}");
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_nm(38.9784, -76.4922, 38.9784, -76.4922);
        assert!(dist < 0.001);
    }

    #[test]
    fn test_haversine_symmetric() {
        let forward = haversine_nm(38.9784, -76.4922, 36.8508, -76.2859);
        let reverse = haversine_nm(36.8508, -76.2859, 38.9784, -76.4922);
        assert!((forward - reverse).abs() < 1e-9);
    }

    #[test]
    fn test_annapolis_to_norfolk_sanity() {
        // Real-world distance is roughly 125 nm
        let dist = haversine_nm(38.9784, -76.4922, 36.8508, -76.2859);
        assert!(
            (123.0..=128.0).contains(&dist),
            "expected 123-128 nm, got {dist}"
        );
    }
}
