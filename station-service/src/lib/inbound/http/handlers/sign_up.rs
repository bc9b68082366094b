use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequestBody>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .sign_up(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SignUpResponseData {
            message: "Sign up successful".to_string(),
            user: (&user).into(),
        },
    ))
}

/// HTTP request body for sign-up (raw JSON).
///
/// Fields are optional so presence can be validated with a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequestBody {
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
}

/// Validation failures, checked in order: missing fields, then email shape,
/// then password policy.
#[derive(Debug, Clone, Error)]
enum ParseSignUpRequestError {
    #[error("Email, password, and name are required")]
    MissingFields,

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Password(#[from] PasswordPolicyError),
}

impl SignUpRequestBody {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseSignUpRequestError> {
        let (email, password, name) = match (self.email, self.password, self.name) {
            (Some(email), Some(password), Some(name))
                if !email.is_empty() && !password.is_empty() && !name.is_empty() =>
            {
                (email, password, name)
            }
            _ => return Err(ParseSignUpRequestError::MissingFields),
        };

        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;

        Ok(CreateUserCommand::new(name, email, password))
    }
}

impl From<ParseSignUpRequestError> for ApiError {
    fn from(err: ParseSignUpRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponseData {
    pub message: String,
    pub user: UserData,
}

/// Public user fields; the password hash never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_checked_first() {
        let body = SignUpRequestBody {
            email: None,
            password: Some("ab".to_string()),
            name: Some("A".to_string()),
        };

        let err = body.try_into_command().unwrap_err();
        assert_eq!(err.to_string(), "Email, password, and name are required");
    }

    #[test]
    fn test_email_checked_before_password() {
        let body = SignUpRequestBody {
            email: Some("not-an-email".to_string()),
            password: Some("ab".to_string()),
            name: Some("A".to_string()),
        };

        let err = body.try_into_command().unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[test]
    fn test_short_password_rejected() {
        let body = SignUpRequestBody {
            email: Some("a@b.com".to_string()),
            password: Some("ab".to_string()),
            name: Some("A".to_string()),
        };

        let err = body.try_into_command().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
