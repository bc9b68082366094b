use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::station::errors::StationError;
use crate::user::errors::UserError;

pub mod create_station;
pub mod delete_station;
pub mod list_stations;
pub mod login;
pub mod sign_up;
pub mod update_station;

/// Successful response: a status code and a directly-serialized body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Closed set of failure responses this API emits.
///
/// Every variant maps to exactly one status code and a safe message; internal
/// error detail is logged, never serialized to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::EmailAlreadyExists => ApiError::BadRequest(err.to_string()),
            UserError::NotFound => ApiError::NotFound(err.to_string()),
            UserError::Hashing(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<StationError> for ApiError {
    fn from(err: StationError) -> Self {
        match err {
            StationError::InvalidStationId(_) | StationError::InvalidStatus(_) => {
                ApiError::BadRequest(err.to_string())
            }
            StationError::NotFound => ApiError::NotFound(err.to_string()),
            StationError::DatabaseError(_) | StationError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
