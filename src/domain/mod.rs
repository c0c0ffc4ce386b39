pub mod exploitation;
pub mod position;
pub mod vertex;

pub use exploitation::Exploitation;
pub use position::PositionId;
pub use vertex::{Polygon, Vertex};
