use auth::AuthenticationError;
use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::sign_up::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Single message for unknown-email and wrong-password so responses do not
/// reveal which part failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Email and password are required".to_string(),
            ))
        }
    };

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFound => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            _ => ApiError::from(e),
        })?;

    let claims = Claims::for_user(
        user.id,
        Some(user.email.as_str().to_string()),
        Some(user.name.clone()),
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::Jwt(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            token: result.access_token,
            user: (&user).into(),
        },
    ))
}

/// HTTP request body for login (raw JSON).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
    pub user: UserData,
}
