use thiserror::Error;

use crate::domain::PositionId;

/// Why a lookup against the record store produced no usable data
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to the record store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("record store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode record store response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no exploitation found for position {0}")]
    NotFound(PositionId),

    #[error("expected one exploitation for position {position_id}, found {count}")]
    MultipleRecords { position_id: PositionId, count: usize },

    #[error("exploitation at position {0} has no border")]
    MissingBorder(PositionId),

    #[error("border of position {0} has no point collection")]
    MissingPoints(PositionId),

    #[error("border of position {position_id} has a malformed point collection: {source}")]
    MalformedPoints {
        position_id: PositionId,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True for failures caused by the data itself rather than the transport
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            FetchError::NotFound(_)
                | FetchError::MultipleRecords { .. }
                | FetchError::MissingBorder(_)
                | FetchError::MissingPoints(_)
                | FetchError::MalformedPoints { .. }
        )
    }
}
