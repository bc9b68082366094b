use thiserror::Error;

/// Error type for password operations.
///
/// A non-matching password is not an error; both variants indicate a fault in
/// the hashing subsystem or a corrupt stored hash.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
