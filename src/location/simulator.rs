use crate::app_config::Simulator;
use crate::domain::{GeoPoint, LocationFix};
use crate::geometry::EARTH_RADIUS_METERS;
use crate::location::LocationSource;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;
use tokio::time::{Interval, interval};

/// Headless stand-in for a positioning SDK: starting from a fixed point, walks
/// a configurable distance in a uniformly random direction on every tick.
#[derive(Debug)]
pub struct SimulatedLocationSource {
    position: GeoPoint,
    config: Simulator,
    rng: StdRng,
    ticker: Interval,
}

impl SimulatedLocationSource {
    pub fn new(start: GeoPoint, config: Simulator) -> Self {
        let ticker = interval(config.tick_interval());

        SimulatedLocationSource {
            position: start,
            config,
            rng: StdRng::from_os_rng(),
            ticker,
        }
    }
}

#[async_trait]
impl LocationSource for SimulatedLocationSource {
    async fn next_fix(&mut self) -> Option<LocationFix> {
        self.ticker.tick().await;

        let fix = step(self.position, &self.config, &mut self.rng);
        self.position = fix.point;
        Some(fix)
    }
}

/// One random-walk step: a uniform bearing, the configured step length and a
/// jittered accuracy reading. The longitude offset is scaled by the cosine of
/// the latitude so the ground distance stays the configured step length.
fn step<R: Rng>(from: GeoPoint, config: &Simulator, rng: &mut R) -> LocationFix {
    let bearing = rng.random_range(0.0..TAU);
    let step_degrees = (config.step_meters() / EARTH_RADIUS_METERS).to_degrees();

    let point = GeoPoint {
        latitude: from.latitude + step_degrees * bearing.cos(),
        longitude: from.longitude + step_degrees * bearing.sin() / from.latitude.to_radians().cos(),
    };

    LocationFix {
        point,
        accuracy_meters: config.accuracy_meters() * rng.random_range(0.5..1.5),
        timestamp: Utc::now(),
    }
}
