pub mod overlay;
pub mod region;
pub mod slot;

pub use overlay::{MapOverlay, Marker, load_overlay};
pub use region::MapRegion;
pub use slot::{FocusTicket, OverlaySlot};
