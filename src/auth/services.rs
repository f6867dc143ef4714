use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};

use super::dto::{LoginRequest, RegisterRequest};
use super::identities::{admin_user, extra_member, ADMIN_EMAIL};
use crate::enrich::UserTables;
use crate::error::{AppError, AppResult};
use crate::remote::models::User;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
const LOGIN_UNAVAILABLE: &str = "An error occurred. Please try again.";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Resolves login credentials to a user record.
///
/// The admin signs in with a password. Directory members sign in with
/// their email and use their username as password. Emails compare exactly.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn authenticate(state: &AppState, req: &LoginRequest) -> AppResult<User> {
    let email = req.email.trim();
    if !is_valid_email(email) {
        return Err(AppError::Validation("Please enter a valid email address".into()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    if email == ADMIN_EMAIL {
        return if state.admin_secret.matches(&req.password) {
            Ok(admin_user())
        } else {
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()))
        };
    }

    let mut members = state.api.users().await.map_err(|e| {
        tracing::error!(error = %e, "directory fetch failed during login");
        AppError::Upstream(LOGIN_UNAVAILABLE.into())
    })?;
    members.push(extra_member());
    debug!(count = members.len(), "directory loaded for login");

    UserTables::LOGIN
        .profile_all(members)
        .into_iter()
        .find(|u| u.email == email && u.username == req.password)
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// `first.last`, lowercased, without whitespace.
pub fn username_for(first_name: &str, last_name: &str) -> String {
    format!("{}.{}", first_name.to_lowercase(), last_name.to_lowercase())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Checks the sign-up form, returning the selected location.
pub fn validate_registration(req: &RegisterRequest) -> AppResult<[f64; 2]> {
    if req.first_name.trim().chars().count() < 2 {
        return Err(AppError::Validation("First name must be at least 2 characters".into()));
    }
    if req.last_name.trim().chars().count() < 2 {
        return Err(AppError::Validation("Last name must be at least 2 characters".into()));
    }
    if !is_valid_email(req.email.trim()) {
        return Err(AppError::Validation("Please enter a valid email address".into()));
    }
    if req.phone.trim().chars().count() < 10 {
        return Err(AppError::Validation("Phone number must be at least 10 characters".into()));
    }
    if req.password.chars().count() < 6 {
        return Err(AppError::Validation("Password must be at least 6 characters".into()));
    }
    if req.password != req.confirm_password {
        return Err(AppError::Validation("Passwords do not match".into()));
    }
    req.location
        .ok_or_else(|| AppError::Validation("Please select an address on the map".into()))
}
