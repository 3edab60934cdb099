use crate::cookies::canonical_cookie::{CanonicalCookie, CookieKey};
use crate::cookies::store::{CookieStore, Deleting, Enumerating};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory cookie store.
/// Modeled after Chromium's `net::CookieMonster`, reduced to what the bridge
/// needs from a web view store: insert, enumerate, delete by identity.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct CookieMonster {
    // Store: Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl Default for CookieMonster {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieMonster {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    /// Insert `cookie`, replacing any cookie with the same name/domain/path.
    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        entry.push(cookie);
    }

    /// Remove the cookie with the given identity. Returns whether it existed.
    pub fn delete(&self, key: &CookieKey) -> bool {
        let Some(mut entry) = self.store.get_mut(&key.domain) else {
            return false;
        };

        let before = entry.len();
        entry.retain(|c| c.name != key.name || c.path != key.path);
        let removed = entry.len() != before;
        let now_empty = entry.is_empty();
        drop(entry); // Release the shard lock before removing the key

        if now_empty {
            self.store.remove_if(&key.domain, |_, v| v.is_empty());
        }

        removed
    }

    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Snapshot of all cookies, oldest first.
    pub fn snapshot(&self) -> Vec<CanonicalCookie> {
        let mut cookies: Vec<CanonicalCookie> = self
            .store
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        cookies.sort_by_key(|c| c.creation_time);
        cookies
    }
}

impl CookieStore for CookieMonster {
    fn get_all_cookies(&self) -> Enumerating {
        let store = self.clone();
        Box::pin(async move { Ok(store.snapshot()) })
    }

    fn delete_cookie(&self, cookie: CanonicalCookie) -> Deleting {
        let store = self.clone();
        Box::pin(async move {
            // Deleting an already-absent cookie still completes.
            store.delete(&cookie.key());
            Ok(())
        })
    }
}
