//! The cookie store abstraction.
//!
//! A [`CookieStore`] is the web view's cookie repository as seen by the
//! bridge: it can enumerate every cookie and delete one cookie by identity.
//! Both operations may complete asynchronously and the store is free to
//! complete deletions in any order.

use crate::base::bridgeerror::BridgeError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use std::{future::Future, pin::Pin, sync::Arc};

/// Alias for the `Future` returned by a full store enumeration.
pub type Enumerating =
    Pin<Box<dyn Future<Output = Result<Vec<CanonicalCookie>, BridgeError>> + Send>>;

/// Alias for the `Future` returned by a single-cookie deletion.
pub type Deleting = Pin<Box<dyn Future<Output = Result<(), BridgeError>> + Send>>;

/// Trait for web view cookie stores.
///
/// # Design Notes
///
/// - Uses `&self` so enumeration and deletion can run concurrently.
/// - Returns boxed futures for trait object compatibility.
/// - Returned futures must not borrow from `self`.
pub trait CookieStore: Send + Sync {
    /// Snapshot of every cookie currently held, in store-defined order.
    fn get_all_cookies(&self) -> Enumerating;

    /// Delete the cookie identified by `cookie`'s name, domain and path.
    fn delete_cookie(&self, cookie: CanonicalCookie) -> Deleting;
}

/// Blanket implementation for Arc-wrapped stores.
impl<S: CookieStore + ?Sized> CookieStore for Arc<S> {
    fn get_all_cookies(&self) -> Enumerating {
        (**self).get_all_cookies()
    }

    fn delete_cookie(&self, cookie: CanonicalCookie) -> Deleting {
        (**self).delete_cookie(cookie)
    }
}
