use crate::domain::GeoPoint;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.latitude.to_radians();
    let phi_2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2) + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let from = GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        };
        let to = GeoPoint {
            latitude: 0.0,
            longitude: 1.0,
        };

        let distance = haversine_meters(from, to);

        // 2 * pi * R / 360
        assert!((distance - 111_194.93).abs() < 1.0, "unexpected distance: {distance}");
    }

    #[test]
    fn identical_points_are_zero_meters_apart() {
        let point = GeoPoint {
            latitude: 52.3731,
            longitude: 4.8926,
        };

        assert_eq!(haversine_meters(point, point), 0.0);
    }
}
