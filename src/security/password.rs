use crate::error::ApiError;

/// One-way adaptive hashing of credentials, backed by bcrypt. The cost is
/// fixed at construction and suited to interactive logins.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Produce a salted bcrypt hash of `plaintext`.
    pub fn hash(&self, plaintext: &str) -> Result<String, ApiError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Verify `plaintext` against a stored hash. A malformed stored hash
    /// verifies as `false` rather than surfacing an error; the digest
    /// comparison inside bcrypt is constant-time.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
    }
}
