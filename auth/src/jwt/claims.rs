use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity embedded in a token payload.
///
/// `user_id` is an opaque identifier; email and name are carried when known
/// at issuance and omitted from the wire otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUser {
    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Token claims: `{"user": {...}, "iat": ..., "exp": ...}`.
///
/// Issuance and expiry timestamps are always present; a token with no expiry
/// cannot be produced through this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user: TokenUser,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user, expiring `ttl_hours` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - Email address, if it should be embedded in the token
    /// * `name` - Display name, if it should be embedded in the token
    /// * `ttl_hours` - Hours until the token expires
    pub fn for_user(
        user_id: impl ToString,
        email: Option<String>,
        name: Option<String>,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            user: TokenUser {
                user_id: user_id.to_string(),
                email,
                name,
            },
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
