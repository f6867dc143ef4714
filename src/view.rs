//! Per-page display state.
//!
//! Every page view runs one fetch chain. A chain takes a generation number
//! when it starts and may only commit its outcome while that number is
//! still the latest issued for the page; results of superseded chains are
//! dropped.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Users,
    UserDetail,
    Posts,
    PostDetail,
    Analytics,
}

impl Page {
    pub fn failure_message(self) -> &'static str {
        match self {
            Page::Users => "Failed to load users. Please try again later.",
            Page::UserDetail => "Failed to load user details. Please try again later.",
            Page::Posts => "Failed to load posts. Please try again later.",
            Page::PostDetail => "Failed to load post details. Please try again later.",
            Page::Analytics => "Failed to load analytics data. Please try again later.",
        }
    }

    pub fn not_found_message(self) -> Option<&'static str> {
        match self {
            Page::UserDetail => Some("User not found"),
            Page::PostDetail => Some("Post not found"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Slot<T> {
    latest: u64,
    state: LoadState<T>,
}

#[derive(Debug)]
pub struct PageLoader<T> {
    slot: Mutex<Slot<T>>,
}

impl<T> Default for PageLoader<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(Slot {
                latest: 0,
                state: LoadState::Idle,
            }),
        }
    }
}

impl<T: Clone> PageLoader<T> {
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a chain: issues the next generation and enters `Loading`.
    pub fn begin(&self) -> Ticket {
        let mut slot = self.lock();
        slot.latest += 1;
        slot.state = LoadState::Loading;
        Ticket(slot.latest)
    }

    /// Commits a chain's outcome in one update. Returns `false` when a newer
    /// chain has started since `ticket` was issued.
    pub fn commit(&self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        let mut slot = self.lock();
        if ticket.0 != slot.latest {
            return false;
        }
        slot.state = match outcome {
            Ok(data) => LoadState::Success(data),
            Err(message) => LoadState::Error(message),
        };
        true
    }

    pub fn snapshot(&self) -> LoadState<T> {
        self.lock().state.clone()
    }

    /// Back to `Idle`. Chains still in flight can no longer commit.
    pub fn reset(&self) {
        let mut slot = self.lock();
        slot.latest += 1;
        slot.state = LoadState::Idle;
    }
}

/// Display state of every dashboard page for one session.
#[derive(Debug, Default)]
pub struct PageViews {
    users: PageLoader<Value>,
    user_detail: PageLoader<Value>,
    posts: PageLoader<Value>,
    post_detail: PageLoader<Value>,
    analytics: PageLoader<Value>,
}

#[derive(Debug, Serialize)]
pub struct ViewsSnapshot {
    pub users: LoadState<Value>,
    pub user_detail: LoadState<Value>,
    pub posts: LoadState<Value>,
    pub post_detail: LoadState<Value>,
    pub analytics: LoadState<Value>,
}

impl PageViews {
    pub fn loader(&self, page: Page) -> &PageLoader<Value> {
        match page {
            Page::Users => &self.users,
            Page::UserDetail => &self.user_detail,
            Page::Posts => &self.posts,
            Page::PostDetail => &self.post_detail,
            Page::Analytics => &self.analytics,
        }
    }

    pub fn snapshot(&self) -> ViewsSnapshot {
        ViewsSnapshot {
            users: self.users.snapshot(),
            user_detail: self.user_detail.snapshot(),
            posts: self.posts.snapshot(),
            post_detail: self.post_detail.snapshot(),
            analytics: self.analytics.snapshot(),
        }
    }

    pub fn reset(&self) {
        for page in [
            Page::Users,
            Page::UserDetail,
            Page::Posts,
            Page::PostDetail,
            Page::Analytics,
        ] {
            self.loader(page).reset();
        }
    }

    /// Runs `chain` as a page view and records its outcome as the page's
    /// display state. The caller always gets its own outcome back.
    pub async fn run<T, F>(&self, page: Page, chain: F) -> AppResult<T>
    where
        T: Serialize,
        F: Future<Output = AppResult<T>>,
    {
        let loader = self.loader(page);
        let ticket = loader.begin();
        let outcome = chain.await;

        let (committed, outcome) = match outcome {
            Ok(data) => match serde_json::to_value(&data) {
                Ok(value) => (loader.commit(ticket, Ok(value)), Ok(data)),
                Err(e) => {
                    let err = AppError::Internal(e.into());
                    (loader.commit(ticket, Err(err.to_string())), Err(err))
                }
            },
            Err(err) => (loader.commit(ticket, Err(err.to_string())), Err(err)),
        };
        if !committed {
            debug!(?page, "superseded page result dropped");
        }
        outcome
    }
}
