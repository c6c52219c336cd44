use crate::domain::{GeoBounds, GeoPoint, LocationFix};

/// Everything the map view currently shows. Immutable; events produce a new
/// state through the transition methods below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    location: Option<LocationFix>,
    bounds: Option<GeoBounds>,
    markers: Vec<GeoPoint>,
    selected: Option<usize>,
}

impl ViewState {
    pub fn location(&self) -> Option<&LocationFix> {
        self.location.as_ref()
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    pub fn markers(&self) -> &[GeoPoint] {
        &self.markers
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Replaces the device location. Markers already on the map survive.
    pub fn with_location(&self, fix: LocationFix) -> ViewState {
        ViewState {
            location: Some(fix),
            ..self.clone()
        }
    }

    pub fn with_bounds(&self, bounds: GeoBounds) -> ViewState {
        ViewState {
            bounds: Some(bounds),
            ..self.clone()
        }
    }

    /// Replaces the marker set and drops the selection, which indexed into the
    /// old set.
    pub fn with_markers(&self, markers: Vec<GeoPoint>) -> ViewState {
        ViewState {
            markers,
            selected: None,
            ..self.clone()
        }
    }

    pub fn without_markers(&self) -> ViewState {
        self.with_markers(Vec::new())
    }

    /// Records the selected marker; out-of-range indices leave the state unchanged.
    pub fn with_selected(&self, index: usize) -> ViewState {
        if index >= self.markers.len() {
            return self.clone();
        }

        ViewState {
            selected: Some(index),
            ..self.clone()
        }
    }

    /// The center and bounds to scatter new markers in, or `None` while the
    /// location is unknown, the bounds are missing or degenerate, or markers
    /// are already on the map.
    pub fn scatter_target(&self) -> Option<(GeoPoint, GeoBounds)> {
        if !self.markers.is_empty() {
            return None;
        }

        let location = self.location.as_ref()?;
        let bounds = self.bounds.filter(GeoBounds::is_valid)?;
        Some((location.point, bounds))
    }
}
