use crate::domain::GeoPoint;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    map: Map,
    scatter: Scatter,
    location: GeoPoint,
    location_updates: Updates,
    location_simulator: Simulator,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn scatter(&self) -> &Scatter {
        &self.scatter
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn location_updates(&self) -> &Updates {
        &self.location_updates
    }

    pub fn location_simulator(&self) -> &Simulator {
        &self.location_simulator
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Map {
    zoom_level: u8,
    circle_stroke_weight: u32,
    #[serde(with = "humantime_serde")]
    refresh_interval: Duration,
}

impl Map {
    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    pub fn circle_stroke_weight(&self) -> u32 {
        self.circle_stroke_weight
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scatter {
    marker_count: usize,
    max_attempts: u32,
}

impl Scatter {
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Updates {
    #[serde(with = "humantime_serde")]
    min_interval: Duration,
    min_distance_meters: f64,
}

impl Updates {
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn min_distance_meters(&self) -> f64 {
        self.min_distance_meters
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Simulator {
    #[serde(with = "humantime_serde")]
    tick_interval: Duration,
    step_meters: f64,
    accuracy_meters: f64,
}

impl Simulator {
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn step_meters(&self) -> f64 {
        self.step_meters
    }

    pub fn accuracy_meters(&self) -> f64 {
        self.accuracy_meters
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { store_buffer_size: 8 },
                map: Map {
                    zoom_level: 15,
                    circle_stroke_weight: 3,
                    refresh_interval: Duration::from_secs(30),
                },
                scatter: Scatter {
                    marker_count: 3,
                    max_attempts: 1_000,
                },
                location: GeoPoint {
                    latitude: 52.3731,
                    longitude: 4.8926,
                },
                location_updates: Updates {
                    min_interval: Duration::from_secs(1),
                    min_distance_meters: 1.0,
                },
                location_simulator: Simulator {
                    tick_interval: Duration::from_secs(2),
                    step_meters: 25.0,
                    accuracy_meters: 10.0,
                },
            },
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.scatter.max_attempts = attempts;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
