use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::JwtKeys;
use crate::error::AppError;
use crate::remote::models::User;
use crate::session::SessionContext;
use crate::state::AppState;

/// Session of the caller, resolved from the bearer token, together with
/// the current-user record it held when the request arrived.
pub struct CurrentSession {
    pub ctx: SessionContext,
    pub user: User,
    pub is_admin: bool,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Unauthorized(msg.into())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Read Authorization header
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| unauthorized("Invalid auth scheme"))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            unauthorized("Invalid or expired token")
        })?;

        let ctx = state
            .sessions
            .context(claims.sub)
            .ok_or_else(|| unauthorized("Not signed in"))?;
        let user = ctx
            .get_current_user()
            .ok_or_else(|| unauthorized("Not signed in"))?;
        let is_admin = state.config.is_admin_email(&user.email);

        Ok(CurrentSession { ctx, user, is_admin })
    }
}
