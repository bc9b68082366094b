use axum::extract::State;
use axum::http::StatusCode;

use super::create_station::StationData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::station::ports::StationServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<StationData>>, ApiError> {
    state
        .station_service
        .list_stations()
        .await
        .map_err(ApiError::from)
        .map(|stations| {
            ApiSuccess::new(
                StatusCode::OK,
                stations.iter().map(StationData::from).collect(),
            )
        })
}
