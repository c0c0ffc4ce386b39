//! locagri - Land exploitation borders and map markers for LocAgri field records

pub mod api;
pub mod border;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod map;

pub use api::{BorderStore, ExploitationStore, SupabaseClient};
pub use border::BorderFetcher;
pub use domain::{Exploitation, PositionId, Polygon, Vertex};
pub use error::FetchError;
pub use geometry::centroid;
pub use map::{MapOverlay, MapRegion, Marker, OverlaySlot, load_overlay};
