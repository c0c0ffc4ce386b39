use serde::Deserialize;

use crate::domain::{Exploitation, PositionId};
use crate::error::FetchError;

/// Exploitation row with its border embedded, as selected by
/// `Border (PointsLoc)`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BorderRow {
    #[serde(rename = "Border", default)]
    pub border: Option<BorderRecord>,
}

/// The referenced border record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BorderRecord {
    /// Point document, left untyped until the fetcher decodes it
    #[serde(rename = "PointsLoc", default)]
    pub points_loc: Option<serde_json::Value>,
}

/// Record store holding exploitation borders
pub trait BorderStore {
    /// Look up the border of one position.
    ///
    /// # Returns
    /// * `Ok(Some(row))` - exactly one exploitation matched
    /// * `Ok(None)` - no exploitation has this position
    /// * `Err` - transport failure, or more than one match
    fn select_border(&self, position_id: &PositionId) -> Result<Option<BorderRow>, FetchError>;
}

/// Record store listing a farmer's exploitations
pub trait ExploitationStore {
    fn select_exploitations(&self, owner: &str) -> Result<Vec<Exploitation>, FetchError>;
}

impl<T: BorderStore + ?Sized> BorderStore for &T {
    fn select_border(&self, position_id: &PositionId) -> Result<Option<BorderRow>, FetchError> {
        (**self).select_border(position_id)
    }
}

impl<T: ExploitationStore + ?Sized> ExploitationStore for &T {
    fn select_exploitations(&self, owner: &str) -> Result<Vec<Exploitation>, FetchError> {
        (**self).select_exploitations(owner)
    }
}
