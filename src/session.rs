//! Current-user records, one per signed-in session.
//!
//! Handlers never touch the store directly; they receive a
//! [`SessionContext`] bound to their session and go through its
//! get/set/clear operations.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::debug;
use uuid::Uuid;

use crate::remote::models::User;
use crate::view::PageViews;

/// Lifetime used when none is configured; matches the default token TTL.
const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

struct SessionRecord {
    user: User,
    views: Arc<PageViews>,
    expires_at: Instant,
}

impl SessionRecord {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Sessions live as long as the token that names them. Expired records are
/// dropped when a session is opened or looked up.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
        }
    }

    /// Opens a session whose current user is `user`.
    pub fn open(&self, user: User) -> SessionContext {
        let id = Uuid::new_v4();
        let views = Arc::new(PageViews::default());
        let now = Instant::now();

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, record| !record.is_expired(now));
        let evicted = before - guard.len();
        guard.insert(
            id,
            SessionRecord {
                user,
                views: views.clone(),
                expires_at: now + self.ttl,
            },
        );
        drop(guard);

        debug!(session_id = %id, evicted, "session opened");
        SessionContext {
            id,
            store: self.clone(),
            views,
        }
    }

    /// Context for a live session; `None` once it has been cleared or has
    /// expired.
    pub fn context(&self, id: Uuid) -> Option<SessionContext> {
        let now = Instant::now();
        {
            let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            match guard.get(&id) {
                None => return None,
                Some(record) if !record.is_expired(now) => {
                    return Some(SessionContext {
                        id,
                        store: self.clone(),
                        views: record.views.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        let removed = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if let Some(record) = removed {
            record.views.reset();
            debug!(session_id = %id, "expired session dropped");
        }
        None
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[derive(Clone)]
pub struct SessionContext {
    id: Uuid,
    store: SessionStore,
    views: Arc<PageViews>,
}

impl SessionContext {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn get_current_user(&self) -> Option<User> {
        let guard = self.store.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(&self.id).map(|record| record.user.clone())
    }

    /// Replaces the current user. A cleared session stays cleared.
    pub fn set_current_user(&self, user: User) -> bool {
        let mut guard = self.store.inner.write().unwrap_or_else(PoisonError::into_inner);
        match guard.get_mut(&self.id) {
            Some(record) => {
                record.user = user;
                true
            }
            None => false,
        }
    }

    /// Drops the current user and the session's page state.
    pub fn clear_current_user(&self) {
        let removed = self
            .store
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
        if let Some(record) = removed {
            record.views.reset();
            debug!(session_id = %self.id, "session cleared");
        }
    }

    pub fn views(&self) -> &PageViews {
        &self.views
    }
}
