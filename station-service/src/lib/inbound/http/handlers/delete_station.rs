use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::station::models::StationId;
use crate::domain::station::ports::StationServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Result<ApiSuccess<DeleteStationResponseData>, ApiError> {
    let station_id =
        StationId::from_string(&station_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .station_service
        .delete_station(&station_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteStationResponseData {
            message: "Charging station deleted successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteStationResponseData {
    pub message: String,
}
