use serde::Serialize;

use crate::domain::{Polygon, Vertex};
use crate::geometry::Bounds;

/// Visible map area, as a center plus the span shown on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Span used when zooming onto a single parcel
    pub const DEFAULT_DELTA: f64 = 0.01;

    /// Rabat, where the surveyed exploitations are
    pub const INITIAL_CENTER: Vertex = Vertex {
        latitude: 34.020882,
        longitude: -6.841650,
    };

    pub fn around(center: Vertex) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: Self::DEFAULT_DELTA,
            longitude_delta: Self::DEFAULT_DELTA,
        }
    }

    /// Region centered on the outline's bounds and wide enough to show all of
    /// it, `None` for an empty outline
    pub fn fit(outline: &Polygon) -> Option<Self> {
        let bounds = Bounds::from_vertices(outline.vertices())?;
        let center = bounds.center();

        Some(Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: bounds.lat_span().max(Self::DEFAULT_DELTA),
            longitude_delta: bounds.lon_span().max(Self::DEFAULT_DELTA),
        })
    }

    pub fn center(&self) -> Vertex {
        Vertex::new(self.latitude, self.longitude)
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        Self::around(Self::INITIAL_CENTER)
    }
}
