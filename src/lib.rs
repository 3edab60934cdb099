//! # shellbridge
//!
//! Native capability bridge for application shells hosting an embedded web
//! view.
//!
//! `shellbridge` lets a shell query the web view's cookies by domain (with
//! optional subdomain inclusion) and clear every cookie in the store, over a
//! method-call boundary with structured error codes.
//!
//! ## Quick Start
//!
//! ```rust
//! use shellbridge::cookies::access::CookieAccessService;
//! use shellbridge::cookies::canonical_cookie::CanonicalCookie;
//! use shellbridge::cookies::monster::CookieMonster;
//!
//! #[tokio::main]
//! async fn main() {
//!     let jar = CookieMonster::new();
//!     jar.set_canonical_cookie(CanonicalCookie::new("sid", "abc", "app.example.com", "/"));
//!
//!     let service = CookieAccessService::new(jar);
//!     let cookies = service.query_cookies("example.com", true).await.unwrap();
//!     println!("Found {} cookies", cookies.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy with shell-facing codes
//! - [`cookies`] - Domain matching, the store seam, and the access service
//! - [`channel`] - Method-call envelopes, handlers, and channel routing
//!
//! Brightness and keep-awake controls are provided by the host platform and
//! are not part of this crate.

pub mod base;
pub mod channel;
pub mod cookies;
