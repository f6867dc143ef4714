use serde::Serialize;

use crate::remote::models::{Comment, Post, User};

/// How many entries the analytics charts show.
pub const TOP_N: usize = 5;

/// Characters of a post title kept in chart labels.
const TITLE_LABEL_CHARS: usize = 20;

/// Counts, for every parent, the children whose foreign key points at it,
/// then keeps the `n` parents with the highest counts.
///
/// Sorting is stable, so parents with equal counts keep their input order.
/// Duplicate parent ids are counted independently.
pub fn top_n_by_count<'p, P, C, K>(
    parents: &'p [P],
    children: &[C],
    parent_key: impl Fn(&P) -> K,
    child_key: impl Fn(&C) -> K,
    n: usize,
) -> Vec<(&'p P, usize)>
where
    K: PartialEq,
{
    let mut counted: Vec<(&P, usize)> = parents
        .iter()
        .map(|parent| {
            let key = parent_key(parent);
            let count = children.iter().filter(|c| child_key(c) == key).count();
            (parent, count)
        })
        .collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(n);
    counted
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostsPerUser {
    pub name: String,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentsPerPost {
    pub id: i64,
    pub title: String,
    pub comments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub posts_per_user: Vec<PostsPerUser>,
    pub comments_per_post: Vec<CommentsPerPost>,
}

pub fn posts_per_user(users: &[User], posts: &[Post], n: usize) -> Vec<PostsPerUser> {
    top_n_by_count(users, posts, |u| u.id, |p| p.user_id, n)
        .into_iter()
        .map(|(user, posts)| PostsPerUser {
            name: user.name.clone(),
            posts,
        })
        .collect()
}

pub fn comments_per_post(posts: &[Post], comments: &[Comment], n: usize) -> Vec<CommentsPerPost> {
    top_n_by_count(posts, comments, |p| Some(p.id), |c| c.post_id, n)
        .into_iter()
        .map(|(post, comments)| CommentsPerPost {
            id: post.id,
            title: title_label(&post.title),
            comments,
        })
        .collect()
}

fn title_label(title: &str) -> String {
    let mut label: String = title.chars().take(TITLE_LABEL_CHARS).collect();
    label.push_str("...");
    label
}

pub fn summarize(users: &[User], posts: &[Post], comments: &[Comment]) -> AnalyticsSummary {
    AnalyticsSummary {
        users: users.len(),
        posts: posts.len(),
        comments: comments.len(),
        posts_per_user: posts_per_user(users, posts, TOP_N),
        comments_per_post: comments_per_post(posts, comments, TOP_N),
    }
}
