use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};

/// One positioning report from a location source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocationFix {
    pub point: GeoPoint,
    pub accuracy_meters: f64,
    pub timestamp: DateTime<Utc>,
}
