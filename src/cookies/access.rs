//! Cookie Access Service - domain-scoped query and store-wide clear.
//!
//! The service is a stateless leaf over a [`CookieStore`]: every call
//! re-enumerates the store, nothing is cached between calls, and the only
//! mutation is [`CookieAccessService::clear_all_cookies`].

use crate::base::bridgeerror::BridgeError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::domain::DomainMatcher;
use crate::cookies::store::CookieStore;
use futures::{stream, FutureExt, StreamExt};
use serde::{Deserialize, Serialize};

/// Default method channel the cookie service is registered under.
pub const DEFAULT_CHANNEL_NAME: &str = "soupreader/webview_cookies";

/// Configuration options for [`CookieAccessService`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CookieServiceConfig {
    /// Compare domains ASCII case-insensitively.
    pub case_insensitive_domains: bool,

    /// Upper bound on deletions in flight during a clear. Unbounded by
    /// default, so every deletion is issued at once. 0 is treated as 1.
    pub max_concurrent_deletions: usize,

    /// Channel name to register under in a
    /// [`BridgeRegistry`](crate::channel::BridgeRegistry).
    pub channel_name: String,
}

impl Default for CookieServiceConfig {
    fn default() -> Self {
        Self {
            case_insensitive_domains: false,
            max_concurrent_deletions: usize::MAX,
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
        }
    }
}

/// Shell-facing projection of a cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    /// Milliseconds since the Unix epoch. Omitted for session cookies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_ms: Option<i64>,
}

impl From<&CanonicalCookie> for CookieRecord {
    fn from(cookie: &CanonicalCookie) -> Self {
        Self {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            secure: cookie.secure,
            http_only: cookie.http_only,
            expires_ms: cookie.expires_ms(),
        }
    }
}

/// Queries and clears cookies held by a web view cookie store.
///
/// # Example
///
/// ```rust
/// use shellbridge::cookies::access::CookieAccessService;
/// use shellbridge::cookies::canonical_cookie::CanonicalCookie;
/// use shellbridge::cookies::monster::CookieMonster;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), shellbridge::base::bridgeerror::BridgeError> {
/// let jar = CookieMonster::new();
/// jar.set_canonical_cookie(CanonicalCookie::new("sid", "1", "app.example.com", "/"));
///
/// let service = CookieAccessService::new(jar);
/// let records = service.query_cookies("example.com", true).await?;
/// assert_eq!(records.len(), 1);
///
/// assert!(service.clear_all_cookies().await?);
/// # Ok(())
/// # }
/// ```
pub struct CookieAccessService<S> {
    store: S,
    matcher: DomainMatcher,
    config: CookieServiceConfig,
}

impl<S: CookieStore> CookieAccessService<S> {
    /// Create a service with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CookieServiceConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(store: S, config: CookieServiceConfig) -> Self {
        Self {
            store,
            matcher: DomainMatcher::new(config.case_insensitive_domains),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CookieServiceConfig {
        &self.config
    }

    /// Return every cookie whose domain falls within `domain`.
    ///
    /// An empty (or whitespace-only) `domain` returns every cookie. Results
    /// keep the store's enumeration order. A store failure is returned as an
    /// error, never as an empty result.
    pub async fn query_cookies(
        &self,
        domain: &str,
        include_subdomains: bool,
    ) -> Result<Vec<CookieRecord>, BridgeError> {
        let cookies = self.enumerate().await?;
        let total = cookies.len();

        let records: Vec<CookieRecord> = cookies
            .iter()
            .filter(|c| self.matcher.matches(&c.domain, domain, include_subdomains))
            .map(CookieRecord::from)
            .collect();

        tracing::debug!(
            domain = %domain.trim(),
            include_subdomains,
            matched = records.len(),
            total,
            "cookie query complete"
        );

        Ok(records)
    }

    /// Delete every cookie in the store.
    ///
    /// Deletions are issued concurrently and the call resolves only after
    /// all of them have resolved. An empty store succeeds without issuing
    /// any deletion. If any deletion fails the remaining ones still run to
    /// completion and [`BridgeError::ClearIncomplete`] is returned.
    pub async fn clear_all_cookies(&self) -> Result<bool, BridgeError> {
        let cookies = self.enumerate().await?;

        if cookies.is_empty() {
            tracing::debug!("cookie store already empty");
            return Ok(true);
        }

        let total = cookies.len();
        let limit = self.config.max_concurrent_deletions.max(1);
        tracing::debug!(total, limit, "clearing cookie store");

        let deletions = cookies.into_iter().map(|cookie| {
            let key = cookie.key();
            self.store.delete_cookie(cookie).map(move |result| (key, result))
        });

        let failed = stream::iter(deletions)
            .buffer_unordered(limit)
            .fold(0usize, |failed, (key, result)| async move {
                match result {
                    Ok(()) => failed,
                    Err(e) => {
                        tracing::warn!(
                            name = %key.name,
                            domain = %key.domain,
                            path = %key.path,
                            error = %e,
                            "cookie deletion failed"
                        );
                        failed + 1
                    }
                }
            })
            .await;

        if failed > 0 {
            return Err(BridgeError::ClearIncomplete { failed, total });
        }

        tracing::debug!(total, "cookie store cleared");
        Ok(true)
    }

    async fn enumerate(&self) -> Result<Vec<CanonicalCookie>, BridgeError> {
        self.store.get_all_cookies().await.map_err(|e| {
            tracing::warn!(error = %e, "cookie store enumeration failed");
            match e {
                e @ BridgeError::StoreUnavailable { .. } => e,
                other => BridgeError::store_unavailable(other.to_string()),
            }
        })
    }
}
