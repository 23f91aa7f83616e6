//! # mg-auth-simple
//!
//! Shared-secret implementation of `AuthProvider`. One password guards the
//! whole gallery; there are no accounts and no hashing.

use mg_core::traits::AuthProvider;

pub struct SharedSecretProvider {
    secret: String,
}

impl SharedSecretProvider {
    /// Accepts the secret (e.g. from an environment variable).
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }
}

impl AuthProvider for SharedSecretProvider {
    fn verify(&self, password: &str) -> bool {
        password == self.secret
    }
}
