use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use super::aggregate::{summarize, AnalyticsSummary};
use crate::{
    auth::extractors::CurrentSession,
    error::{AppError, AppResult},
    state::AppState,
    view::Page,
};

pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/analytics", get(get_analytics))
}

/// Users, posts and comments, fetched one after another.
pub async fn load_summary(state: &AppState) -> AppResult<AnalyticsSummary> {
    let failed = |e| AppError::from_api(Page::Analytics, e);
    let users = state.api.users().await.map_err(failed)?;
    let posts = state.api.posts().await.map_err(failed)?;
    let comments = state.api.comments().await.map_err(failed)?;
    Ok(summarize(&users, &posts, &comments))
}

#[instrument(skip(state, session))]
pub async fn get_analytics(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<AnalyticsSummary>> {
    let is_admin = session.is_admin;
    let chain = async {
        if !is_admin {
            warn!(user = session.user.id, "analytics denied");
            return Err(AppError::Forbidden(
                "You don't have permission to view this page".into(),
            ));
        }
        load_summary(&state).await
    };
    let summary = session.ctx.views().run(Page::Analytics, chain).await?;
    info!(
        users = summary.users,
        posts = summary.posts,
        comments = summary.comments,
        "analytics computed"
    );
    Ok(Json(summary))
}
