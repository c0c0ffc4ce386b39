use serde::{Deserialize, Serialize};

use super::{PositionId, Vertex};

/// Position row embedded in an exploitation listing
#[derive(Debug, Clone, Copy, Deserialize)]
struct StoredPosition {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

/// One land exploitation owned by a farmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exploitation {
    #[serde(rename(deserialize = "Position_ID"))]
    pub position_id: PositionId,
    /// Surface area as recorded by the field agent
    #[serde(rename(deserialize = "Superficie"), default)]
    pub superficie: Option<f64>,
    #[serde(
        rename(deserialize = "Position"),
        default,
        deserialize_with = "deserialize_position"
    )]
    pub position: Option<Vertex>,
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<Vertex>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let stored = Option::<StoredPosition>::deserialize(deserializer)?;
    Ok(stored.map(|p| Vertex::new(p.latitude, p.longitude)))
}
