use geo::{Contains, LineString};
use serde::{Deserialize, Serialize};

use crate::geometry::centroid;

/// A WGS84 point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub latitude: f64,
    pub longitude: f64,
}

impl Vertex {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check latitude is in [-90, 90] and longitude in [-180, 180]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Parcel boundary as stored, in boundary-path order.
///
/// An empty polygon means no boundary is known for the parcel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex centroid, `None` when the polygon is empty
    pub fn centroid(&self) -> Option<Vertex> {
        centroid(&self.vertices)
    }

    /// Number of vertices outside the valid WGS84 ranges
    pub fn out_of_range_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.is_in_range()).count()
    }

    /// Check whether a point lies strictly inside the outline.
    ///
    /// Fewer than three vertices enclose no area, so nothing is inside.
    pub fn contains(&self, point: &Vertex) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let exterior: LineString<f64> = self
            .vertices
            .iter()
            .map(|v| geo::coord! { x: v.longitude, y: v.latitude })
            .collect();
        let outline = geo::Polygon::new(exterior, vec![]);

        outline.contains(&geo::Point::new(point.longitude, point.latitude))
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vertex> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
