use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{PostDetails, PostFilter, PostsPage};
use super::services::{filter_cards, load_feed, load_post, parse_post_id, topics};
use crate::{auth::extractors::CurrentSession, error::AppResult, state::AppState, view::Page};

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/:id", get(get_post))
}

#[instrument(skip(state, session))]
pub async fn list_posts(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(filter): Query<PostFilter>,
) -> AppResult<Json<PostsPage>> {
    let feed = session
        .ctx
        .views()
        .run(
            Page::Posts,
            load_feed(&state, &session.user, session.is_admin),
        )
        .await?;

    let total = feed.len();
    let topics = topics(&feed);
    let posts = filter_cards(feed, filter.q.as_deref(), filter.topic.as_deref());
    info!(total, shown = posts.len(), "posts listed");
    Ok(Json(PostsPage {
        posts,
        topics,
        total,
    }))
}

#[instrument(skip(state, session))]
pub async fn get_post(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(raw_id): Path<String>,
) -> AppResult<Json<PostDetails>> {
    let chain = async {
        let id = parse_post_id(&raw_id)?;
        load_post(&state, &session.user, session.is_admin, id).await
    };
    let details = session.ctx.views().run(Page::PostDetail, chain).await?;
    Ok(Json(details))
}
