use async_trait::async_trait;

use crate::domain::station::errors::StationError;
use crate::domain::station::models::ChargingStation;
use crate::domain::station::models::CreateStationCommand;
use crate::domain::station::models::StationId;
use crate::domain::station::models::UpdateStationCommand;

/// Port for charging-station domain service operations.
#[async_trait]
pub trait StationServicePort: Send + Sync + 'static {
    /// Create a new charging station.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_station(
        &self,
        command: CreateStationCommand,
    ) -> Result<ChargingStation, StationError>;

    /// List all charging stations.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_stations(&self) -> Result<Vec<ChargingStation>, StationError>;

    /// Partially update an existing charging station.
    ///
    /// # Errors
    /// * `NotFound` - Station does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_station(
        &self,
        id: &StationId,
        command: UpdateStationCommand,
    ) -> Result<ChargingStation, StationError>;

    /// Delete a charging station. Deleting an absent station is not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_station(&self, id: &StationId) -> Result<(), StationError>;
}

/// Persistence operations for charging stations.
#[async_trait]
pub trait StationRepository: Send + Sync + 'static {
    /// Persist new station to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, station: ChargingStation) -> Result<ChargingStation, StationError>;

    /// Retrieve station by identifier.
    ///
    /// # Returns
    /// Optional station entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &StationId) -> Result<Option<ChargingStation>, StationError>;

    /// Retrieve all stations from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<ChargingStation>, StationError>;

    /// Update existing station in storage.
    ///
    /// # Errors
    /// * `NotFound` - Station does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, station: ChargingStation) -> Result<ChargingStation, StationError>;

    /// Remove station from storage. Removing an absent station succeeds.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &StationId) -> Result<(), StationError>;
}
