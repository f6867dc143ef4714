//! Index-based pairing of directory records with catalog decorations.
//!
//! Every selection is `table[index % table.len()]`: pure, deterministic and
//! wrapping. An empty table yields no decoration and the record is left as
//! fetched.

use rand::{seq::SliceRandom, Rng};

use crate::catalog;
use crate::remote::models::{Comment, Post, User};

/// Number of profile slots used when a user is decorated by id.
const PROFILE_SLOTS: i64 = 10;

/// Maximum number of related posts offered next to a post.
pub const RELATED_POSTS: usize = 3;

pub fn pick<T>(table: &[T], index: usize) -> Option<&T> {
    if table.is_empty() {
        return None;
    }
    table.get(index % table.len())
}

fn slot(id: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    id.rem_euclid(len as i64) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostDecoration<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image: &'a str,
    pub topic: &'a str,
}

impl PostDecoration<'_> {
    pub fn apply(&self, mut post: Post) -> Post {
        post.title = self.title.to_string();
        post.body = self.body.to_string();
        post.image = Some(self.image.to_string());
        post.topic = Some(self.topic.to_string());
        post
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PostTables<'a> {
    pub titles: &'a [&'a str],
    pub bodies: &'a [&'a str],
    pub images: &'a [&'a str],
    pub topics: &'a [&'a str],
}

impl PostTables<'static> {
    pub const CATALOG: Self = Self {
        titles: catalog::POST_TITLES,
        bodies: catalog::POST_BODIES,
        images: catalog::POST_IMAGES,
        topics: catalog::TOPICS,
    };
}

impl<'a> PostTables<'a> {
    pub fn decorate(&self, index: usize) -> Option<PostDecoration<'a>> {
        Some(PostDecoration {
            title: pick(self.titles, index)?,
            body: pick(self.bodies, index)?,
            image: pick(self.images, index)?,
            topic: pick(self.topics, index)?,
        })
    }

    /// Title slot derived from a post id; the detail page and its related
    /// posts decorate from here.
    pub fn slot_for_id(&self, id: i64) -> usize {
        slot(id, self.titles.len())
    }

    /// Decorates posts by their position in the list.
    pub fn enrich_all(&self, posts: Vec<Post>) -> Vec<Post> {
        posts
            .into_iter()
            .enumerate()
            .map(|(i, post)| match self.decorate(i) {
                Some(deco) => deco.apply(post),
                None => post,
            })
            .collect()
    }

    /// Decorates a single post by its id.
    pub fn enrich_by_id(&self, post: Post) -> Post {
        match self.decorate(self.slot_for_id(post.id)) {
            Some(deco) => deco.apply(post),
            None => post,
        }
    }

    /// Picks up to [`RELATED_POSTS`] posts other than `post_id` at random and
    /// decorates them from the slots following `base_slot`.
    pub fn related<R: Rng + ?Sized>(
        &self,
        all: &[Post],
        post_id: i64,
        base_slot: usize,
        rng: &mut R,
    ) -> Vec<Post> {
        let others: Vec<&Post> = all.iter().filter(|p| p.id != post_id).collect();
        others
            .choose_multiple(rng, RELATED_POSTS)
            .enumerate()
            .map(|(idx, post)| {
                let post = (*post).clone();
                let slot = match self.titles.len() {
                    0 => 0,
                    len => (base_slot + idx + 1) % len,
                };
                match self.decorate(slot) {
                    Some(deco) => deco.apply(post),
                    None => post,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UserTables<'a> {
    pub avatars: &'a [&'a str],
    pub bios: &'a [&'a str],
    pub interests: &'a [&'a [&'a str]],
}

impl UserTables<'static> {
    pub const CATALOG: Self = Self {
        avatars: catalog::PROFILE_IMAGES,
        bios: catalog::USER_BIOS,
        interests: catalog::INTERESTS,
    };

    /// Tables for the record stored when a member signs in.
    pub const LOGIN: Self = Self {
        avatars: catalog::LOGIN_PROFILE_IMAGES,
        bios: catalog::LOGIN_BIOS,
        interests: catalog::LOGIN_INTERESTS,
    };
}

impl UserTables<'_> {
    pub fn avatar(&self, mut user: User, index: usize) -> User {
        if let Some(avatar) = pick(self.avatars, index) {
            user.profile_image = Some(avatar.to_string());
        }
        user
    }

    /// Avatar and bio, as shown in the directory listing.
    pub fn listing(&self, user: User, index: usize) -> User {
        let mut user = self.avatar(user, index);
        if let Some(bio) = pick(self.bios, index) {
            user.bio = Some(bio.to_string());
        }
        user
    }

    /// Avatar, bio and interests.
    pub fn profile(&self, user: User, index: usize) -> User {
        let mut user = self.listing(user, index);
        if let Some(interests) = pick(self.interests, index) {
            user.interests = Some(interests.iter().map(|s| s.to_string()).collect());
        }
        user
    }

    pub fn profile_by_id(&self, user: User) -> User {
        let index = user.id.rem_euclid(PROFILE_SLOTS) as usize;
        self.profile(user, index)
    }

    pub fn avatar_by_id(&self, user: User) -> User {
        let index = slot(user.id, self.avatars.len());
        self.avatar(user, index)
    }

    pub fn listing_all(&self, users: Vec<User>) -> Vec<User> {
        users
            .into_iter()
            .enumerate()
            .map(|(i, u)| self.listing(u, i))
            .collect()
    }

    pub fn profile_all(&self, users: Vec<User>) -> Vec<User> {
        users
            .into_iter()
            .enumerate()
            .map(|(i, u)| self.profile(u, i))
            .collect()
    }
}

/// Mock discussion for a post topic: the topic's own set when there is one,
/// the general set otherwise.
pub fn comments_for_topic(topic: &str, count: usize) -> Vec<Comment> {
    let bodies = catalog::topic_comments(topic).unwrap_or(catalog::GENERAL_COMMENTS);
    bodies
        .iter()
        .take(count)
        .enumerate()
        .map(|(j, body)| Comment {
            id: j as i64 + 1,
            post_id: None,
            name: pick(catalog::COMMENTERS, j).copied().unwrap_or_default().to_string(),
            email: pick(catalog::COMMENTER_EMAILS, j).copied().unwrap_or_default().to_string(),
            body: body.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            user_id,
            title: format!("upstream title {id}"),
            body: "upstream body".into(),
            image: None,
            topic: None,
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            address: Default::default(),
            phone: String::new(),
            website: String::new(),
            company: Default::default(),
            profile_image: None,
            bio: None,
            interests: None,
        }
    }

    const SMALL: PostTables<'static> = PostTables {
        titles: &["t0", "t1", "t2"],
        bodies: &["b0", "b1"],
        images: &["i0", "i1", "i2", "i3"],
        topics: &["p0"],
    };

    #[test]
    fn pick_wraps_around() {
        let table = ["a", "b", "c"];
        assert_eq!(pick(&table, 0), Some(&"a"));
        assert_eq!(pick(&table, 2), Some(&"c"));
        assert_eq!(pick(&table, 3), pick(&table, 0));
        assert_eq!(pick(&table, 7), Some(&"b"));
    }

    #[test]
    fn pick_on_empty_table_is_none() {
        let table: [&str; 0] = [];
        assert_eq!(pick(&table, 0), None);
        assert_eq!(pick(&table, 42), None);
    }

    #[test]
    fn each_field_wraps_on_its_own_table() {
        let deco = SMALL.decorate(5).unwrap();
        assert_eq!(deco.title, "t2");
        assert_eq!(deco.body, "b1");
        assert_eq!(deco.image, "i1");
        assert_eq!(deco.topic, "p0");
    }

    #[test]
    fn decoration_is_pure() {
        assert_eq!(SMALL.decorate(4), SMALL.decorate(4));
        let a = PostTables::CATALOG.enrich_all(vec![post(1, 1), post(2, 1)]);
        let b = PostTables::CATALOG.enrich_all(vec![post(1, 1), post(2, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn index_zero_and_table_length_match() {
        let len = catalog::POST_TITLES.len();
        let tables = PostTables::CATALOG;
        assert_eq!(
            tables.decorate(0).unwrap().title,
            tables.decorate(len).unwrap().title
        );
    }

    #[test]
    fn list_enrichment_follows_position_not_id() {
        let posts = SMALL.enrich_all(vec![post(40, 1), post(7, 1)]);
        assert_eq!(posts[0].title, "t0");
        assert_eq!(posts[1].title, "t1");
        assert_eq!(posts[1].image.as_deref(), Some("i1"));
        assert_eq!(posts[1].id, 7);
        assert_eq!(posts[1].user_id, 1);
    }

    #[test]
    fn empty_tables_leave_posts_untouched() {
        let empty = PostTables { titles: &[], bodies: &[], images: &[], topics: &[] };
        let posts = empty.enrich_all(vec![post(1, 1)]);
        assert_eq!(posts[0], post(1, 1));
        assert_eq!(empty.enrich_by_id(post(3, 1)), post(3, 1));
    }

    #[test]
    fn detail_enrichment_uses_post_id() {
        let decorated = SMALL.enrich_by_id(post(4, 2));
        assert_eq!(decorated.title, "t1");
        assert_eq!(decorated.body, "b1");
        assert_eq!(decorated.topic.as_deref(), Some("p0"));
    }

    #[test]
    fn related_posts_exclude_the_current_post() {
        let all: Vec<Post> = (1..=10).map(|id| post(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let related = SMALL.related(&all, 4, 1, &mut rng);

        assert_eq!(related.len(), RELATED_POSTS);
        assert!(related.iter().all(|p| p.id != 4));
        assert_eq!(related[0].title, "t2");
        assert_eq!(related[1].title, "t0");
        assert_eq!(related[2].title, "t1");
    }

    #[test]
    fn related_posts_shrink_with_small_input() {
        let all = vec![post(1, 1), post(2, 1)];
        let mut rng = StdRng::seed_from_u64(1);
        let related = SMALL.related(&all, 1, 0, &mut rng);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, 2);
    }

    #[test]
    fn user_listing_sets_avatar_and_bio_only() {
        let users = UserTables::CATALOG.listing_all(vec![user(1), user(2)]);
        assert_eq!(users[1].profile_image.as_deref(), Some(catalog::PROFILE_IMAGES[1]));
        assert_eq!(users[1].bio.as_deref(), Some(catalog::USER_BIOS[1]));
        assert!(users[1].interests.is_none());
    }

    #[test]
    fn user_profile_by_id_uses_ten_slots() {
        let decorated = UserTables::CATALOG.profile_by_id(user(13));
        assert_eq!(decorated.profile_image.as_deref(), Some(catalog::PROFILE_IMAGES[3]));
        assert_eq!(decorated.bio.as_deref(), Some(catalog::USER_BIOS[3]));
        assert_eq!(
            decorated.interests.unwrap(),
            catalog::INTERESTS[3].iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn topic_comments_are_numbered_from_one() {
        let comments = comments_for_topic("Metaverse", 5);
        assert_eq!(comments.len(), 5);
        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[4].id, 5);
        assert_eq!(comments[0].name, catalog::COMMENTERS[0]);
        assert_eq!(comments[2].email, catalog::COMMENTER_EMAILS[2]);
        assert_eq!(comments[0].body, catalog::topic_comments("Metaverse").unwrap()[0]);
    }

    #[test]
    fn unknown_topic_falls_back_to_general_comments() {
        let comments = comments_for_topic("Gardening", 2);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].body, catalog::GENERAL_COMMENTS[1]);
    }
}
