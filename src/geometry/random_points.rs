use crate::domain::{GeoBounds, GeoPoint};
use ordered_float::OrderedFloat;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScatterError {
    #[error("gave up after {attempts} attempt(s) with {accepted} point(s) accepted")]
    AttemptsExhausted { attempts: u32, accepted: usize },
}

/// Scatters `count` distinct random points around `center`, each offset by at
/// most half of the corresponding bounds span. Offsets follow the signed
/// spans, so inverted corners mirror the box rather than widen it. A candidate
/// that exactly equals the center or an already accepted point is redrawn;
/// every draw counts against `max_attempts`, and running out returns an error
/// instead of spinning on a degenerate box.
pub fn random_points<R: Rng>(
    center: GeoPoint,
    bounds: &GeoBounds,
    count: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Vec<GeoPoint>, ScatterError> {
    let lat_span = bounds.lat_span();
    let lng_span = bounds.lng_span();

    let mut points = Vec::with_capacity(count);
    let mut seen: HashSet<(OrderedFloat<f64>, OrderedFloat<f64>)> = HashSet::with_capacity(count);
    let mut attempts = 0u32;

    while points.len() < count {
        if attempts == max_attempts {
            return Err(ScatterError::AttemptsExhausted {
                attempts,
                accepted: points.len(),
            });
        }
        attempts += 1;

        let lat_sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let lng_sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let candidate = GeoPoint {
            latitude: center.latitude + lat_sign * rng.random_range(0.0..1.0) * lat_span * 0.5,
            longitude: center.longitude + lng_sign * rng.random_range(0.0..1.0) * lng_span * 0.5,
        };

        if candidate == center || !seen.insert((OrderedFloat(candidate.latitude), OrderedFloat(candidate.longitude))) {
            continue;
        }

        points.push(candidate);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn origin() -> GeoPoint {
        GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn bounds(ne: (f64, f64), sw: (f64, f64)) -> GeoBounds {
        GeoBounds {
            northeast: GeoPoint {
                latitude: ne.0,
                longitude: ne.1,
            },
            southwest: GeoPoint {
                latitude: sw.0,
                longitude: sw.1,
            },
        }
    }

    fn assert_within_spans(points: &[GeoPoint], center: GeoPoint, bounds: &GeoBounds) {
        let half_lat = bounds.lat_span().abs() * 0.5;
        let half_lng = bounds.lng_span().abs() * 0.5;

        for point in points {
            assert!((point.latitude - center.latitude).abs() <= half_lat, "latitude of {point:?} is out of range");
            assert!((point.longitude - center.longitude).abs() <= half_lng, "longitude of {point:?} is out of range");
        }
    }

    #[test]
    fn scatters_three_distinct_points_around_the_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = bounds((1.0, 1.0), (-1.0, -1.0));

        let points = random_points(origin(), &bounds, 3, 1_000, &mut rng).unwrap();

        assert_eq!(points.len(), 3);
        assert_within_spans(&points, origin(), &bounds);
        assert!(!points.contains(&origin()));

        let unique: HashSet<_> = points.iter().map(|p| (OrderedFloat(p.latitude), OrderedFloat(p.longitude))).collect();
        assert_eq!(unique.len(), points.len());
    }

    #[test]
    fn respects_sign_aware_spans_with_inverted_corners() {
        let mut rng = StdRng::seed_from_u64(21);
        let inverted = bounds((-1.0, -1.0), (1.0, 1.0));

        let points = random_points(origin(), &inverted, 25, 10_000, &mut rng).unwrap();

        assert_within_spans(&points, origin(), &inverted);
    }

    #[test]
    fn accepts_points_in_acceptance_order_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = GeoPoint {
            latitude: 40.0,
            longitude: -73.0,
        };
        let bounds = bounds((40.1, -72.9), (39.8, -73.2));

        let points = random_points(center, &bounds, 50, 100_000, &mut rng).unwrap();

        assert_eq!(points.len(), 50);
        assert!(!points.contains(&center));
        let unique: HashSet<_> = points.iter().map(|p| (OrderedFloat(p.latitude), OrderedFloat(p.longitude))).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn zero_count_returns_no_points() {
        let mut rng = StdRng::seed_from_u64(1);

        let points = random_points(origin(), &bounds((1.0, 1.0), (-1.0, -1.0)), 0, 0, &mut rng).unwrap();

        assert_eq!(points, Vec::new());
    }

    #[test]
    fn degenerate_bounds_exhaust_the_attempt_budget() {
        // Zero spans collapse every candidate onto the center, which is rejected.
        let corner = GeoPoint {
            latitude: 5.0,
            longitude: 5.0,
        };
        let mut rng = StdRng::seed_from_u64(11);

        let result = random_points(corner, &bounds((5.0, 5.0), (5.0, 5.0)), 3, 64, &mut rng);

        assert_eq!(result, Err(ScatterError::AttemptsExhausted { attempts: 64, accepted: 0 }));
    }

    #[test]
    fn entropy_seeded_runs_differ() {
        let bounds = bounds((1.0, 1.0), (-1.0, -1.0));

        let first = random_points(origin(), &bounds, 3, 1_000, &mut StdRng::from_os_rng()).unwrap();
        let second = random_points(origin(), &bounds, 3, 1_000, &mut StdRng::from_os_rng()).unwrap();

        assert_ne!(first, second);
    }
}
