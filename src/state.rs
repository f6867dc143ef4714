use std::sync::Arc;
use std::time::Duration;

use crate::auth::password::AdminSecret;
use crate::config::AppConfig;
use crate::remote::{DirectoryApi, HttpDirectory};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn DirectoryApi>,
    pub sessions: SessionStore,
    pub admin_secret: AdminSecret,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let api = Arc::new(HttpDirectory::new(
            &config.api_base_url,
            config.upstream_timeout,
        )?) as Arc<dyn DirectoryApi>;

        Self::from_parts(config, api)
    }

    pub fn from_parts(config: Arc<AppConfig>, api: Arc<dyn DirectoryApi>) -> anyhow::Result<Self> {
        let admin_secret = AdminSecret::from_config(config.admin_password_hash.as_deref())?;
        // sessions expire with the token that names them
        let ttl = Duration::from_secs(config.jwt.ttl_minutes.max(1) as u64 * 60);
        Ok(Self {
            config,
            api,
            sessions: SessionStore::new(ttl),
            admin_secret,
        })
    }

    #[cfg(test)]
    pub fn fake(api: Arc<fake::FakeDirectory>) -> Self {
        let config = Arc::new(AppConfig {
            api_base_url: "https://fake.local".into(),
            upstream_timeout: None,
            admin_emails: vec!["admin@admin.com".into(), "cabanzamia@gmail.com".into()],
            admin_password_hash: None,
            jwt: crate::config::JwtConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
        });
        // hashing is slow in debug builds; share one secret across tests
        static ADMIN: std::sync::OnceLock<AdminSecret> = std::sync::OnceLock::new();
        let admin_secret = ADMIN
            .get_or_init(|| AdminSecret::from_config(None).expect("admin secret"))
            .clone();
        Self {
            config,
            api,
            sessions: SessionStore::default(),
            admin_secret,
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::remote::models::{Comment, Post, User};
    use crate::remote::{ApiError, DirectoryApi};

    /// In-memory directory with a call counter and a failure switch.
    #[derive(Default)]
    pub struct FakeDirectory {
        pub users: Vec<User>,
        pub posts: Vec<Post>,
        pub comments: Vec<Comment>,
        pub failing: AtomicBool,
        pub calls: AtomicUsize,
    }

    impl FakeDirectory {
        /// Three users; user 1 owns posts 1 and 2, user 2 owns post 3;
        /// post 2 has two comments, post 3 one.
        pub fn seeded() -> Self {
            let users = (1..=3).map(user).collect();
            let posts = vec![post(1, 1), post(2, 1), post(3, 2)];
            let comments = vec![comment(1, 2), comment(2, 2), comment(3, 3)];
            Self {
                users,
                posts,
                comments,
                ..Default::default()
            }
        }

        pub fn fail(&self) {
            self.failing.store(true, Ordering::SeqCst);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self, path: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ApiError::Status {
                    url: format!("https://fake.local{}", path),
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            Ok(())
        }

        fn missing(path: String) -> ApiError {
            ApiError::Status {
                url: format!("https://fake.local{}", path),
                status: StatusCode::NOT_FOUND,
            }
        }
    }

    #[async_trait]
    impl DirectoryApi for FakeDirectory {
        async fn users(&self) -> Result<Vec<User>, ApiError> {
            self.hit("/users")?;
            Ok(self.users.clone())
        }

        async fn user(&self, id: i64) -> Result<User, ApiError> {
            let path = format!("/users/{}", id);
            self.hit(&path)?;
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| Self::missing(path))
        }

        async fn posts(&self) -> Result<Vec<Post>, ApiError> {
            self.hit("/posts")?;
            Ok(self.posts.clone())
        }

        async fn post(&self, id: i64) -> Result<Post, ApiError> {
            let path = format!("/posts/{}", id);
            self.hit(&path)?;
            self.posts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| Self::missing(path))
        }

        async fn comments(&self) -> Result<Vec<Comment>, ApiError> {
            self.hit("/comments")?;
            Ok(self.comments.clone())
        }
    }

    pub fn user(id: i64) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("User {}", id),
            "username": format!("user{}", id),
            "email": format!("user{}@example.com", id),
            "address": {
                "street": "Main St",
                "suite": "Apt. 1",
                "city": "Springfield",
                "zipcode": "00000",
                "geo": { "lat": "10.5", "lng": "-20.25" }
            },
            "phone": "555-0100",
            "website": "example.com",
            "company": { "name": "Acme", "catchPhrase": "Things", "bs": "stuff" }
        }))
        .expect("fake user")
    }

    pub fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            user_id,
            title: format!("upstream title {}", id),
            body: format!("upstream body {}", id),
            image: None,
            topic: None,
        }
    }

    pub fn comment(id: i64, post_id: i64) -> Comment {
        Comment {
            id,
            post_id: Some(post_id),
            name: format!("commenter {}", id),
            email: format!("c{}@example.com", id),
            body: "nice".into(),
        }
    }
}
