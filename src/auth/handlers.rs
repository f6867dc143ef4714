use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse},
    extractors::CurrentSession,
    jwt::JwtKeys,
    services::{authenticate, username_for, validate_registration},
};
use crate::{error::AppResult, state::AppState};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = authenticate(&state, &payload).await?;
    let is_admin = state.config.is_admin_email(&user.email);

    let ctx = state.sessions.open(user.clone());
    let token = match JwtKeys::from_ref(&state).sign(ctx.id()) {
        Ok(t) => t,
        Err(e) => {
            ctx.clear_current_user();
            return Err(e.into());
        }
    };

    info!(
        user_id = user.id,
        session_id = %ctx.id(),
        is_admin,
        active_sessions = state.sessions.len(),
        "user logged in"
    );
    Ok(Json(LoginResponse {
        token,
        user,
        is_admin,
    }))
}

/// Validates the sign-up form. Accounts are not stored; members sign in
/// with their directory credentials.
#[instrument(skip(payload))]
pub async fn register(Json(payload): Json<RegisterRequest>) -> AppResult<Json<RegisterResponse>> {
    let location = validate_registration(&payload)?;
    let name = format!("{} {}", payload.first_name.trim(), payload.last_name.trim());
    let username = username_for(&payload.first_name, &payload.last_name);

    info!(%username, "registration accepted");
    Ok(Json(RegisterResponse {
        name,
        username,
        location,
        message: "Your account has been created. Please login.".into(),
    }))
}

#[instrument(skip(session))]
pub async fn logout(session: CurrentSession) -> StatusCode {
    session.ctx.clear_current_user();
    info!(user_id = session.user.id, "user logged out");
    StatusCode::NO_CONTENT
}

#[instrument(skip(session))]
pub async fn get_me(session: CurrentSession) -> Json<MeResponse> {
    Json(MeResponse {
        user: session.user,
        is_admin: session.is_admin,
    })
}
