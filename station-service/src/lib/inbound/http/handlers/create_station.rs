use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::station::models::ChargingStation;
use crate::domain::station::models::CreateStationCommand;
use crate::domain::station::models::StationStatus;
use crate::domain::station::ports::StationServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_station(
    State(state): State<AppState>,
    Json(body): Json<CreateStationRequestBody>,
) -> Result<ApiSuccess<StationMutationResponseData>, ApiError> {
    let station = state
        .station_service
        .create_station(body.into_command())
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        StationMutationResponseData {
            message: "Charging station inserted".to_string(),
            data: (&station).into(),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationRequestBody {
    name: String,
    latitude: f64,
    longitude: f64,
    status: StationStatus,
    power_output: f64,
    connector_type: String,
}

impl CreateStationRequestBody {
    fn into_command(self) -> CreateStationCommand {
        CreateStationCommand {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status,
            power_output: self.power_output,
            connector_type: self.connector_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StationMutationResponseData {
    pub message: String,
    pub data: StationData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationData {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StationStatus,
    pub power_output: f64,
    pub connector_type: String,
}

impl From<&ChargingStation> for StationData {
    fn from(station: &ChargingStation) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            status: station.status,
            power_output: station.power_output,
            connector_type: station.connector_type.clone(),
        }
    }
}
