use thiserror::Error;

/// Error for StationId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StationIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for unrecognized station status values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StationStatusError {
    #[error("Unknown station status: {0}")]
    Unknown(String),
}

/// Top-level error for charging-station operations
#[derive(Debug, Clone, Error)]
pub enum StationError {
    #[error("Invalid station ID: {0}")]
    InvalidStationId(#[from] StationIdError),

    #[error(transparent)]
    InvalidStatus(#[from] StationStatusError),

    #[error("Charging station not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
