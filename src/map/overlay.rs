use serde::Serialize;

use crate::api::BorderStore;
use crate::border::BorderFetcher;
use crate::domain::{PositionId, Polygon, Vertex};

/// Pin placed at the centroid of a border
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub position: Vertex,
    /// False when the vertex mean lands outside a concave outline
    pub inside_outline: bool,
}

/// Everything the map view draws for one parcel.
///
/// `marker` is present exactly when `outline` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapOverlay {
    pub outline: Polygon,
    pub marker: Option<Marker>,
}

impl MapOverlay {
    pub fn from_polygon(outline: Polygon) -> Self {
        let marker = outline.centroid().map(|position| Marker {
            position,
            inside_outline: outline.contains(&position),
        });

        if let Some(m) = &marker
            && !m.inside_outline
            && outline.len() >= 3
        {
            log::debug!("Centroid {:?} falls outside its outline", m.position);
        }

        Self { outline, marker }
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

/// Fetch the border of `position_id` and derive its marker
pub fn load_overlay<S: BorderStore>(
    fetcher: &BorderFetcher<S>,
    position_id: &PositionId,
) -> MapOverlay {
    MapOverlay::from_polygon(fetcher.fetch_boundary(position_id))
}
