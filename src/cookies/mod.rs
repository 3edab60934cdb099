//! Web view cookie access.
//!
//! This module lets a shell inspect and clear the cookies held by an
//! embedded web view:
//!
//! - **Scoping**: pure domain matcher with optional subdomain inclusion ([`domain`])
//! - **Store seam**: async enumerate-all / delete-one trait ([`store::CookieStore`])
//! - **Service**: query and clear operations ([`access::CookieAccessService`])
//! - **In-memory store**: a concurrent jar ([`monster::CookieMonster`])
//!
//! # Architecture
//!
//! | Chromium (C++) | shellbridge (Rust) | Responsibility |
//! |----------------|--------------------|----------------|
//! | `net::CookieStore` | [`CookieStore`](store::CookieStore) | Store interface |
//! | `net::CookieMonster` | [`CookieMonster`](monster::CookieMonster) | In-memory jar |
//! | `net::CanonicalCookie` | [`CanonicalCookie`](canonical_cookie::CanonicalCookie) | Cookie |
//!
//! # Query and clear
//!
//! ```rust
//! use shellbridge::cookies::access::CookieAccessService;
//! use shellbridge::cookies::canonical_cookie::CanonicalCookie;
//! use shellbridge::cookies::monster::CookieMonster;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), shellbridge::base::bridgeerror::BridgeError> {
//! let jar = CookieMonster::new();
//! jar.set_canonical_cookie(CanonicalCookie::new("a", "1", "example.com", "/"));
//! jar.set_canonical_cookie(CanonicalCookie::new("c", "3", "other.com", "/"));
//!
//! let service = CookieAccessService::new(jar.clone());
//! assert_eq!(service.query_cookies("example.com", true).await?.len(), 1);
//!
//! service.clear_all_cookies().await?;
//! assert_eq!(jar.total_cookie_count(), 0);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod canonical_cookie;
pub mod domain;
pub mod monster;
pub mod store;
