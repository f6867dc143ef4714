use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_ADMIN_EMAILS: &str = "admin@admin.com,cabanzamia@gmail.com";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub upstream_timeout: Option<Duration>,
    pub admin_emails: Vec<String>,
    /// Argon2 PHC string for the built-in admin; hashed from the default
    /// password at startup when unset.
    pub admin_password_hash: Option<String>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "xrdash".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "xrdash-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        Ok(Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
            upstream_timeout: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs),
            admin_emails: parse_emails(
                &std::env::var("ADMIN_EMAILS").unwrap_or_else(|_| DEFAULT_ADMIN_EMAILS.into()),
            ),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").ok(),
            jwt,
        })
    }

    /// Exact match against the configured list.
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|admin| admin == email)
    }
}

fn parse_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_emails_are_trimmed() {
        assert_eq!(
            parse_emails(" admin@admin.com, ,cabanzamia@gmail.com "),
            vec!["admin@admin.com", "cabanzamia@gmail.com"]
        );
    }

    #[test]
    fn default_admin_list_matches_both_admins() {
        let config = AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            upstream_timeout: None,
            admin_emails: parse_emails(DEFAULT_ADMIN_EMAILS),
            admin_password_hash: None,
            jwt: JwtConfig {
                secret: "s".into(),
                issuer: "i".into(),
                audience: "a".into(),
                ttl_minutes: 5,
            },
        };
        assert!(config.is_admin_email("admin@admin.com"));
        assert!(config.is_admin_email("cabanzamia@gmail.com"));
        assert!(!config.is_admin_email("CabanzaMia@gmail.com"));
        assert!(!config.is_admin_email("Sincere@april.biz"));
    }
}
