pub mod commands;
pub mod events;
mod geo_bounds;
mod geo_point;
mod location_fix;
pub mod map_service;
mod marker;
mod view_state;

pub use geo_bounds::GeoBounds;
pub use geo_point::GeoPoint;
pub use location_fix::LocationFix;
pub use marker::Marker;
pub use view_state::ViewState;
