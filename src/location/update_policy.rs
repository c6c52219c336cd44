use crate::app_config::Updates;
use crate::domain::LocationFix;
use crate::geometry::haversine_meters;
use std::time::Duration;

/// Admission filter for location updates: after the first fix, a fix is only
/// admitted when the minimum interval elapsed AND the device moved at least
/// the minimum distance since the last admitted fix.
#[derive(Debug)]
pub struct UpdatePolicy {
    min_interval: Duration,
    min_distance_meters: f64,
    last_admitted: Option<LocationFix>,
}

impl UpdatePolicy {
    pub fn new(config: &Updates) -> Self {
        UpdatePolicy {
            min_interval: config.min_interval(),
            min_distance_meters: config.min_distance_meters(),
            last_admitted: None,
        }
    }

    pub fn admit(&mut self, fix: &LocationFix) -> bool {
        let admitted = match &self.last_admitted {
            None => true,
            Some(last) => {
                // A fix timestamped before the last admitted one never passes.
                let elapsed = (fix.timestamp - last.timestamp).to_std().unwrap_or(Duration::ZERO);
                elapsed >= self.min_interval && haversine_meters(last.point, fix.point) >= self.min_distance_meters
            }
        };

        if admitted {
            self.last_admitted = Some(*fix);
        }

        admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::GeoPoint;
    use chrono::{DateTime, TimeZone, Utc};

    fn fix(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> LocationFix {
        LocationFix {
            point: GeoPoint { latitude, longitude },
            accuracy_meters: 5.0,
            timestamp,
        }
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn the_first_fix_is_always_admitted() {
        let config = AppConfigBuilder::new().build();
        let mut policy = UpdatePolicy::new(config.location_updates());

        assert!(policy.admit(&fix(52.3731, 4.8926, start_time())));
    }

    #[test]
    fn a_fix_arriving_too_soon_is_dropped() {
        let config = AppConfigBuilder::new().build();
        let mut policy = UpdatePolicy::new(config.location_updates());
        policy.admit(&fix(52.3731, 4.8926, start_time()));

        // Far enough, but only half the minimum interval has elapsed.
        let too_soon = fix(52.3831, 4.8926, start_time() + chrono::Duration::milliseconds(500));

        assert!(!policy.admit(&too_soon));
    }

    #[test]
    fn a_fix_too_close_to_the_last_admitted_one_is_dropped() {
        let config = AppConfigBuilder::new().build();
        let mut policy = UpdatePolicy::new(config.location_updates());
        policy.admit(&fix(52.3731, 4.8926, start_time()));

        // A centimeter of movement after plenty of time.
        let too_close = fix(52.3731001, 4.8926, start_time() + chrono::Duration::seconds(10));

        assert!(!policy.admit(&too_close));
    }

    #[test]
    fn a_fix_far_and_late_enough_is_admitted() {
        let config = AppConfigBuilder::new().build();
        let mut policy = UpdatePolicy::new(config.location_updates());
        policy.admit(&fix(52.3731, 4.8926, start_time()));

        let next = fix(52.3831, 4.8926, start_time() + chrono::Duration::seconds(2));

        assert!(policy.admit(&next));
    }

    #[test]
    fn rejected_fixes_do_not_move_the_baseline() {
        let config = AppConfigBuilder::new().build();
        let mut policy = UpdatePolicy::new(config.location_updates());
        policy.admit(&fix(52.3731, 4.8926, start_time()));

        // Rejected for arriving too soon, despite covering enough distance.
        assert!(!policy.admit(&fix(52.3831, 4.8926, start_time() + chrono::Duration::milliseconds(500))));

        // Measured against the admitted fix, not the rejected one.
        let next = fix(52.3931, 4.8926, start_time() + chrono::Duration::seconds(2));
        assert!(policy.admit(&next));
    }
}
