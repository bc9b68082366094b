use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::station::errors::StationIdError;
use crate::station::errors::StationStatusError;

/// Charging-station aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingStation {
    pub id: StationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StationStatus,
    pub power_output: f64,
    pub connector_type: String,
}

/// Station unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub Uuid);

impl StationId {
    /// Generate a new random station ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a station ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, StationIdError> {
        Uuid::parse_str(s)
            .map(StationId)
            .map_err(|e| StationIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for StationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Operational status of a charging station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Active,
    Inactive,
}

impl StationStatus {
    /// Status as its stored/wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Active => "active",
            StationStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for StationStatus {
    type Err = StationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StationStatus::Active),
            "inactive" => Ok(StationStatus::Inactive),
            other => Err(StationStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new charging station
#[derive(Debug)]
pub struct CreateStationCommand {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StationStatus,
    pub power_output: f64,
    pub connector_type: String,
}

/// Command to update an existing charging station.
///
/// All fields are optional to support partial updates; absent fields keep
/// their stored value.
#[derive(Debug, Default)]
pub struct UpdateStationCommand {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<StationStatus>,
    pub power_output: Option<f64>,
    pub connector_type: Option<String>,
}
