use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Built-in admin password used when no hash is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Argon2 hash of the admin password, checked on every admin login.
#[derive(Clone)]
pub struct AdminSecret {
    phc: Arc<str>,
}

impl AdminSecret {
    /// Uses the configured PHC string, or hashes the built-in password.
    pub fn from_config(configured: Option<&str>) -> anyhow::Result<Self> {
        let phc = match configured {
            Some(hash) => {
                PasswordHash::new(hash).map_err(|e| {
                    anyhow::anyhow!("ADMIN_PASSWORD_HASH is not a PHC string: {}", e)
                })?;
                hash.to_string()
            }
            None => hash(DEFAULT_ADMIN_PASSWORD)?,
        };
        Ok(Self { phc: phc.into() })
    }

    pub fn matches(&self, plain: &str) -> bool {
        match PasswordHash::new(&self.phc) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                error!(error = %e, "argon2 parse hash error");
                false
            }
        }
    }
}

fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_accepts_builtin_password() {
        let secret = AdminSecret::from_config(None).expect("hashing should succeed");
        assert!(secret.phc.starts_with("$argon2"));
        assert!(secret.matches("admin123"));
        assert!(!secret.matches("admin1234"));
    }

    #[test]
    fn configured_hash_replaces_builtin_password() {
        let phc = hash("correct-horse").unwrap();
        let secret = AdminSecret::from_config(Some(&phc)).unwrap();
        assert!(secret.matches("correct-horse"));
        assert!(!secret.matches("admin123"));
    }

    #[test]
    fn malformed_configured_hash_is_rejected() {
        let err = AdminSecret::from_config(Some("not-a-valid-hash")).err().unwrap();
        assert!(err.to_string().contains("ADMIN_PASSWORD_HASH"));
    }
}
