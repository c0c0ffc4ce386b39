use crate::domain::Vertex;

/// Per-axis extent of a vertex set, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Create bounds from a set of vertices
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;

        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        bounds.expand(&vertices[1..]);

        Some(bounds)
    }

    /// Expand bounds to include another set of vertices
    pub fn expand(&mut self, vertices: &[Vertex]) {
        for v in vertices {
            self.min_lat = self.min_lat.min(v.latitude);
            self.max_lat = self.max_lat.max(v.latitude);
            self.min_lon = self.min_lon.min(v.longitude);
            self.max_lon = self.max_lon.max(v.longitude);
        }
    }

    pub fn contains(&self, v: &Vertex) -> bool {
        (self.min_lat..=self.max_lat).contains(&v.latitude)
            && (self.min_lon..=self.max_lon).contains(&v.longitude)
    }

    /// Pull a vertex onto the box, axis by axis.
    ///
    /// NaN coordinates or NaN bounds pass through unchanged.
    pub fn clamp(&self, v: Vertex) -> Vertex {
        Vertex::new(
            clamp_axis(v.latitude, self.min_lat, self.max_lat),
            clamp_axis(v.longitude, self.min_lon, self.max_lon),
        )
    }

    pub fn center(&self) -> Vertex {
        Vertex::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
