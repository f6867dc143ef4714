use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{UserDetails, UserSearch, UsersPage};
use super::services::{load_directory, load_profile, parse_user_id, search};
use crate::{auth::extractors::CurrentSession, error::AppResult, state::AppState, view::Page};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, session))]
pub async fn list_users(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(params): Query<UserSearch>,
) -> AppResult<Json<UsersPage>> {
    let users = session
        .ctx
        .views()
        .run(Page::Users, load_directory(&state))
        .await?;
    let total = users.len();
    let users = match params.q.as_deref() {
        Some(term) => search(users, term),
        None => users,
    };
    info!(total, shown = users.len(), "users listed");
    Ok(Json(UsersPage { users, total }))
}

#[instrument(skip(state, session))]
pub async fn get_user(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UserDetails>> {
    let chain = async {
        let id = parse_user_id(&raw_id)?;
        let user = load_profile(&state, &session.user, id).await?;
        let location = user.address.geo.coordinates();
        Ok(UserDetails { user, location })
    };
    let details = session.ctx.views().run(Page::UserDetail, chain).await?;
    Ok(Json(details))
}
