use crate::auth::identities::{public_admin_profile, ADMIN_ID};
use crate::enrich::UserTables;
use crate::error::{AppError, AppResult};
use crate::remote::models::User;
use crate::state::AppState;
use crate::view::Page;

pub async fn load_directory(state: &AppState) -> AppResult<Vec<User>> {
    let users = state
        .api
        .users()
        .await
        .map_err(|e| AppError::from_api(Page::Users, e))?;
    Ok(UserTables::CATALOG.listing_all(users))
}

/// Case-insensitive match on name, username or email.
pub fn search(users: Vec<User>, term: &str) -> Vec<User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return users;
    }
    users
        .into_iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&term)
                || u.username.to_lowercase().contains(&term)
                || u.email.to_lowercase().contains(&term)
        })
        .collect()
}

pub fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::InvalidId("Invalid user ID".into()))
}

/// Profile for `id`. The admin's own profile comes from the session
/// record; everyone else sees the public admin profile.
pub async fn load_profile(state: &AppState, current: &User, id: i64) -> AppResult<User> {
    if id == ADMIN_ID {
        return Ok(if current.id == ADMIN_ID {
            current.clone()
        } else {
            public_admin_profile()
        });
    }

    let user = state
        .api
        .user(id)
        .await
        .map_err(|e| AppError::from_api(Page::UserDetail, e))?;
    Ok(UserTables::CATALOG.profile_by_id(user))
}
