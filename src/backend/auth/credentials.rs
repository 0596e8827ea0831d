/**
 * Credential Codec
 *
 * One-way password hashing with bcrypt. The cost is fixed at
 * `bcrypt::DEFAULT_COST`; hashes produced at other costs (for example by an
 * older deployment) still verify because bcrypt encodes the cost in the hash.
 */

use thiserror::Error;

/// Password hashing failures
///
/// A wrong password is not an error: [`CredentialCodec::verify`] returns
/// `Ok(false)` for that.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    HashingError(bcrypt::BcryptError),

    #[error("stored password hash is corrupt: {0}")]
    VerificationError(bcrypt::BcryptError),
}

/// Hashes and verifies passwords
#[derive(Debug, Clone, Copy)]
pub struct CredentialCodec {
    cost: u32,
}

impl Default for CredentialCodec {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        bcrypt::hash(plaintext, self.cost).map_err(CredentialError::HashingError)
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<bool, CredentialError> {
        bcrypt::verify(plaintext, hash).map_err(CredentialError::VerificationError)
    }
}
