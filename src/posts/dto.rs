use serde::{Deserialize, Serialize};

use crate::remote::models::{Comment, Post, User};

#[derive(Debug, Default, Deserialize)]
pub struct PostFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Author summary shown on post cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub profile_image: Option<String>,
}

impl From<&User> for Author {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            username: u.username.clone(),
            profile_image: u.profile_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    #[serde(flatten)]
    pub post: Post,
    pub author: Option<Author>,
}

#[derive(Debug, Serialize)]
pub struct PostsPage {
    pub posts: Vec<PostCard>,
    /// Distinct topics of the visible posts, in first-seen order.
    pub topics: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PostDetails {
    pub post: Post,
    pub author: Author,
    pub comments: Vec<Comment>,
    pub related: Vec<Post>,
}
