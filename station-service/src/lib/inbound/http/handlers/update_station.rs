use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_station::StationMutationResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::station::models::StationId;
use crate::domain::station::models::StationStatus;
use crate::domain::station::models::UpdateStationCommand;
use crate::domain::station::ports::StationServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Json(body): Json<UpdateStationRequestBody>,
) -> Result<ApiSuccess<StationMutationResponseData>, ApiError> {
    let station_id =
        StationId::from_string(&station_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let station = state
        .station_service
        .update_station(&station_id, body.into_command())
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        StationMutationResponseData {
            message: "Charging station updated successfully".to_string(),
            data: (&station).into(),
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStationRequestBody {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    status: Option<StationStatus>,
    power_output: Option<f64>,
    connector_type: Option<String>,
}

impl UpdateStationRequestBody {
    fn into_command(self) -> UpdateStationCommand {
        UpdateStationCommand {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status,
            power_output: self.power_output,
            connector_type: self.connector_type,
        }
    }
}
