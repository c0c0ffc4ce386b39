pub mod bounds;
pub mod centroid;

pub use bounds::Bounds;
pub use centroid::centroid;
