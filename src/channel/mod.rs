//! Method-call boundary between the shell and native services.
//!
//! The shell talks to the bridge through named channels. Each call carries
//! a method name and a JSON argument map, and resolves to exactly one
//! [`MethodResult`]: a success value, a structured error with a
//! machine-readable code, or `NotImplemented` for methods (or channels) the
//! bridge does not know.
//!
//! ```rust
//! use serde_json::json;
//! use shellbridge::channel::{BridgeRegistry, CookieChannel, MethodCall, MethodResult};
//! use shellbridge::cookies::access::CookieAccessService;
//! use shellbridge::cookies::monster::CookieMonster;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let channel = CookieChannel::new(CookieAccessService::new(CookieMonster::new()));
//! let name = channel.channel_name().to_string();
//!
//! let mut registry = BridgeRegistry::new();
//! registry.register(name.clone(), channel);
//!
//! let call = MethodCall::new("getCookies", json!({ "domain": "example.com" }));
//! let result = registry.dispatch(&name, call).await;
//! assert_eq!(result, MethodResult::Success(json!([])));
//! # }
//! ```

pub mod call;
pub mod cookies;
pub mod registry;

pub use call::{MethodCall, MethodResult};
pub use cookies::CookieChannel;
pub use registry::BridgeRegistry;

use std::{future::Future, pin::Pin};

/// Alias for the `Future` returned by a method-call handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = MethodResult> + Send>>;

/// A native service reachable over a channel.
///
/// Handlers never fail: every error is folded into the returned
/// [`MethodResult`].
pub trait MethodCallHandler: Send + Sync {
    fn handle(&self, call: MethodCall) -> HandlerFuture;
}
