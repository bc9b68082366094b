use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a fresh random salt per hash. The PHC string output embeds
/// the algorithm, cost parameters, and salt, so verification needs nothing
/// beyond the stored string. Cost parameters live here and nowhere else;
/// retune them as hardware improves without touching callers.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher with the library's current cost defaults.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing operation itself failed; never raised
    ///   for any particular password content
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password candidate against a stored hash.
    ///
    /// Recomputes using the salt and parameters embedded in `stored` and
    /// compares in constant time.
    ///
    /// # Returns
    /// `Ok(false)` for a non-matching password; a mismatch is a normal
    /// outcome, not an error
    ///
    /// # Errors
    /// * `VerificationFailed` - The stored hash is not a parseable PHC string,
    ///   or the verification subsystem failed
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(stored).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
