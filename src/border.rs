//! Border lookup: position id to stored outline

use serde::Deserialize;

use crate::api::BorderStore;
use crate::domain::{PositionId, Polygon, Vertex};
use crate::error::FetchError;

/// Point document stored in `Border.PointsLoc`
#[derive(Debug, Deserialize)]
struct PointsDocument {
    points: Vec<StoredPoint>,
}

#[derive(Debug, Deserialize)]
struct StoredPoint {
    lat: f64,
    lon: f64,
}

/// Resolves a position to the outline of its border
#[derive(Debug, Clone)]
pub struct BorderFetcher<S> {
    store: S,
}

impl<S: BorderStore> BorderFetcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch the border of `position_id`, keeping the reason for any failure.
    ///
    /// Vertices come back in stored order, with no deduplication or
    /// simplification.
    pub fn try_fetch_boundary(&self, position_id: &PositionId) -> Result<Polygon, FetchError> {
        let row = self
            .store
            .select_border(position_id)?
            .ok_or_else(|| FetchError::NotFound(position_id.clone()))?;
        let border = row
            .border
            .ok_or_else(|| FetchError::MissingBorder(position_id.clone()))?;
        let points_loc = border
            .points_loc
            .filter(|value| !value.is_null())
            .ok_or_else(|| FetchError::MissingPoints(position_id.clone()))?;

        let document = decode_points(points_loc).map_err(|source| FetchError::MalformedPoints {
            position_id: position_id.clone(),
            source,
        })?;

        let polygon: Polygon = document
            .points
            .into_iter()
            .map(|p| Vertex::new(p.lat, p.lon))
            .collect();

        let out_of_range = polygon.out_of_range_count();
        if out_of_range > 0 {
            log::warn!(
                "Border of position {} has {} of {} vertices outside WGS84 ranges",
                position_id,
                out_of_range,
                polygon.len()
            );
        }

        Ok(polygon)
    }

    /// Fetch the border of `position_id`, or an empty polygon if anything
    /// goes wrong. Failures are logged, never returned.
    pub fn fetch_boundary(&self, position_id: &PositionId) -> Polygon {
        self.try_fetch_boundary(position_id).unwrap_or_else(|e| {
            log::error!("Error fetching border data: {e}");
            Polygon::empty()
        })
    }
}

/// Decode the point document, which text columns hand back as a JSON string
fn decode_points(value: serde_json::Value) -> Result<PointsDocument, serde_json::Error> {
    match value {
        serde_json::Value::String(text) => serde_json::from_str(&text),
        other => serde_json::from_value(other),
    }
}
