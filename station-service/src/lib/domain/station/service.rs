use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::station::errors::StationError;
use crate::domain::station::models::ChargingStation;
use crate::domain::station::models::CreateStationCommand;
use crate::domain::station::models::StationId;
use crate::domain::station::models::UpdateStationCommand;
use crate::station::ports::StationRepository;
use crate::station::ports::StationServicePort;

/// Domain service implementation for charging-station operations.
pub struct StationService<SR>
where
    SR: StationRepository,
{
    repository: Arc<SR>,
}

impl<SR> StationService<SR>
where
    SR: StationRepository,
{
    /// Create a new station service with an injected repository.
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> StationServicePort for StationService<SR>
where
    SR: StationRepository,
{
    async fn create_station(
        &self,
        command: CreateStationCommand,
    ) -> Result<ChargingStation, StationError> {
        let station = ChargingStation {
            id: StationId::new(),
            name: command.name,
            latitude: command.latitude,
            longitude: command.longitude,
            status: command.status,
            power_output: command.power_output,
            connector_type: command.connector_type,
        };

        self.repository.create(station).await
    }

    async fn list_stations(&self) -> Result<Vec<ChargingStation>, StationError> {
        self.repository.list_all().await
    }

    async fn update_station(
        &self,
        id: &StationId,
        command: UpdateStationCommand,
    ) -> Result<ChargingStation, StationError> {
        let mut station = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(StationError::NotFound)?;

        if let Some(name) = command.name {
            station.name = name;
        }
        if let Some(latitude) = command.latitude {
            station.latitude = latitude;
        }
        if let Some(longitude) = command.longitude {
            station.longitude = longitude;
        }
        if let Some(status) = command.status {
            station.status = status;
        }
        if let Some(power_output) = command.power_output {
            station.power_output = power_output;
        }
        if let Some(connector_type) = command.connector_type {
            station.connector_type = connector_type;
        }

        self.repository.update(station).await
    }

    async fn delete_station(&self, id: &StationId) -> Result<(), StationError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::station::models::StationStatus;

    mock! {
        pub TestStationRepository {}

        #[async_trait]
        impl StationRepository for TestStationRepository {
            async fn create(&self, station: ChargingStation) -> Result<ChargingStation, StationError>;
            async fn find_by_id(&self, id: &StationId) -> Result<Option<ChargingStation>, StationError>;
            async fn list_all(&self) -> Result<Vec<ChargingStation>, StationError>;
            async fn update(&self, station: ChargingStation) -> Result<ChargingStation, StationError>;
            async fn delete(&self, id: &StationId) -> Result<(), StationError>;
        }
    }

    fn station(id: StationId) -> ChargingStation {
        ChargingStation {
            id,
            name: "Plaza".to_string(),
            latitude: 45.5,
            longitude: -122.6,
            status: StationStatus::Active,
            power_output: 50.0,
            connector_type: "CCS".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_station_assigns_id() {
        let mut repository = MockTestStationRepository::new();

        repository
            .expect_create()
            .withf(|s| s.name == "Plaza" && s.status == StationStatus::Active)
            .times(1)
            .returning(|s| Ok(s));

        let service = StationService::new(Arc::new(repository));

        let created = service
            .create_station(CreateStationCommand {
                name: "Plaza".to_string(),
                latitude: 45.5,
                longitude: -122.6,
                status: StationStatus::Active,
                power_output: 50.0,
                connector_type: "CCS".to_string(),
            })
            .await
            .expect("create_station failed");

        assert_eq!(created.name, "Plaza");
    }

    #[tokio::test]
    async fn test_update_station_merges_partial_fields() {
        let id = StationId::new();
        let mut repository = MockTestStationRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(station(id))));

        repository
            .expect_update()
            .withf(|s| {
                s.status == StationStatus::Inactive
                    && s.name == "Plaza"
                    && s.connector_type == "CCS"
            })
            .times(1)
            .returning(|s| Ok(s));

        let service = StationService::new(Arc::new(repository));

        let command = UpdateStationCommand {
            status: Some(StationStatus::Inactive),
            ..Default::default()
        };

        let updated = service
            .update_station(&id, command)
            .await
            .expect("update_station failed");

        assert_eq!(updated.status, StationStatus::Inactive);
    }

    #[tokio::test]
    async fn test_update_station_not_found() {
        let mut repository = MockTestStationRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = StationService::new(Arc::new(repository));

        let result = service
            .update_station(&StationId::new(), UpdateStationCommand::default())
            .await;

        assert!(matches!(result, Err(StationError::NotFound)));
    }
}
