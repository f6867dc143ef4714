use std::collections::HashMap;

use tracing::{debug, warn};

use super::dto::{Author, PostCard, PostDetails};
use crate::enrich::{comments_for_topic, PostTables, UserTables};
use crate::error::{AppError, AppResult};
use crate::remote::models::{Post, User};
use crate::state::AppState;
use crate::view::Page;

const COMMENTS_PER_POST: usize = 5;

/// Posts a viewer may see: everything for admins, their own otherwise.
pub fn visible_to(posts: Vec<Post>, viewer: &User, is_admin: bool) -> Vec<Post> {
    if is_admin {
        return posts;
    }
    posts.into_iter().filter(|p| p.user_id == viewer.id).collect()
}

/// Users, then posts; filters by ownership and decorates by position.
pub async fn load_feed(state: &AppState, viewer: &User, is_admin: bool) -> AppResult<Vec<PostCard>> {
    let users = state
        .api
        .users()
        .await
        .map_err(|e| AppError::from_api(Page::Posts, e))?;
    let authors: HashMap<i64, Author> = UserTables::CATALOG
        .listing_all(users)
        .iter()
        .map(|u| (u.id, Author::from(u)))
        .collect();

    let posts = state
        .api
        .posts()
        .await
        .map_err(|e| AppError::from_api(Page::Posts, e))?;
    let posts = visible_to(posts, viewer, is_admin);
    debug!(visible = posts.len(), is_admin, "feed filtered");

    Ok(PostTables::CATALOG
        .enrich_all(posts)
        .into_iter()
        .map(|post| PostCard {
            author: authors.get(&post.user_id).cloned(),
            post,
        })
        .collect())
}

pub fn topics(cards: &[PostCard]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for topic in cards.iter().filter_map(|c| c.post.topic.as_ref()) {
        if !seen.contains(topic) {
            seen.push(topic.clone());
        }
    }
    seen
}

/// Search term over title, body, author name and topic, combined with an
/// exact topic filter.
pub fn filter_cards(cards: Vec<PostCard>, term: Option<&str>, topic: Option<&str>) -> Vec<PostCard> {
    let term = term.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    let topic = topic.map(str::trim).filter(|t| !t.is_empty());

    cards
        .into_iter()
        .filter(|card| {
            let post = &card.post;
            let matches_search = term.is_empty()
                || post.title.to_lowercase().contains(&term)
                || post.body.to_lowercase().contains(&term)
                || card
                    .author
                    .as_ref()
                    .is_some_and(|a| a.name.to_lowercase().contains(&term))
                || post
                    .topic
                    .as_ref()
                    .is_some_and(|t| t.to_lowercase().contains(&term));
            let matches_topic = topic.map_or(true, |wanted| post.topic.as_deref() == Some(wanted));
            matches_search && matches_topic
        })
        .collect()
}

/// Post ids are positive integers.
pub fn parse_post_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::InvalidId("Invalid post ID".into()))
}

/// Post, ownership check, author, topic comments, then related posts.
pub async fn load_post(
    state: &AppState,
    viewer: &User,
    is_admin: bool,
    post_id: i64,
) -> AppResult<PostDetails> {
    let fetched = state
        .api
        .post(post_id)
        .await
        .map_err(|e| AppError::from_api(Page::PostDetail, e))?;

    if !is_admin && fetched.user_id != viewer.id {
        warn!(post_id, viewer = viewer.id, owner = fetched.user_id, "post access denied");
        return Err(AppError::Forbidden(
            "You don't have permission to view this post".into(),
        ));
    }

    let tables = PostTables::CATALOG;
    let base_slot = tables.slot_for_id(fetched.id);
    let post = tables.enrich_by_id(fetched);

    let author = state
        .api
        .user(post.user_id)
        .await
        .map_err(|e| AppError::from_api(Page::PostDetail, e))?;
    let author = Author::from(&UserTables::CATALOG.avatar_by_id(author));

    let comments = comments_for_topic(post.topic.as_deref().unwrap_or_default(), COMMENTS_PER_POST);

    let all = state
        .api
        .posts()
        .await
        .map_err(|e| AppError::from_api(Page::PostDetail, e))?;
    let related = {
        let mut rng = rand::thread_rng();
        tables.related(&all, post_id, base_slot, &mut rng)
    };

    Ok(PostDetails {
        post,
        author,
        comments,
        related,
    })
}
