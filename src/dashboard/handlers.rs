use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{SettingsResponse, SettingsUpdate, Welcome};
use super::services::{apply_settings, cards, subtitle};
use crate::{
    auth::extractors::CurrentSession,
    error::{AppError, AppResult},
    state::AppState,
    view::ViewsSnapshot,
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(welcome))
        .route("/dashboard/state", get(view_state))
        .route("/settings", get(get_settings).put(update_settings))
}

#[instrument(skip(session))]
pub async fn welcome(session: CurrentSession) -> Json<Welcome> {
    let is_admin = session.is_admin;
    Json(Welcome {
        greeting: format!("Welcome, {}", session.user.name),
        subtitle: subtitle(is_admin),
        cards: cards(is_admin),
        user: session.user,
        is_admin,
    })
}

/// Last committed state of every page in this session.
#[instrument(skip(session))]
pub async fn view_state(session: CurrentSession) -> Json<ViewsSnapshot> {
    Json(session.ctx.views().snapshot())
}

#[instrument(skip(session))]
pub async fn get_settings(session: CurrentSession) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        user: session.user,
        is_admin: session.is_admin,
        message: "Manage your account settings and preferences",
    })
}

#[instrument(skip(state, session, update))]
pub async fn update_settings(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(update): Json<SettingsUpdate>,
) -> AppResult<Json<SettingsResponse>> {
    let user = apply_settings(session.user, update)?;
    if !session.ctx.set_current_user(user.clone()) {
        return Err(AppError::Unauthorized("Not signed in".into()));
    }
    let is_admin = state.config.is_admin_email(&user.email);
    info!(user_id = user.id, is_admin, "settings saved");
    Ok(Json(SettingsResponse {
        user,
        is_admin,
        message: "Your profile settings have been updated successfully.",
    }))
}
