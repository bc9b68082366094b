//! Authentication library for the charging-station backend
//!
//! Provides the security-relevant building blocks the HTTP service composes:
//! - Password hashing (Argon2id, PHC string output)
//! - Signed bearer token issuance and verification
//! - An `Authenticator` coordinating both at login
//!
//! The signing secret is injected by construction; nothing in this crate reads
//! the environment or holds global state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", None, None, 168);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.user.user_id, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Sign-up: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("user123", Some("alice@example.com".into()), None, 168);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Gate: verify token on every request
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.user.user_id, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenUser;
pub use password::PasswordError;
pub use password::PasswordHasher;
