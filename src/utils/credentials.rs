// src/utils/credentials.rs

use super::hash::verify_password;

/// Decides whether an admin login is accepted.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Plain comparison against a configured username and password.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Compares the password against an argon2 hash.
pub struct HashedCredentials {
    username: String,
    password_hash: String,
}

impl HashedCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl CredentialVerifier for HashedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match verify_password(password, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Admin password hash is unusable: {}", e);
                false
            }
        }
    }
}
