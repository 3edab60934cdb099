use crate::channel::call::{MethodCall, MethodResult};
use crate::channel::MethodCallHandler;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Routes method calls to handlers by channel name.
///
/// Calls on a channel with no registered handler resolve to
/// [`MethodResult::NotImplemented`].
#[derive(Default, Clone)]
pub struct BridgeRegistry {
    handlers: HashMap<String, Arc<dyn MethodCallHandler>>,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `channel`, replacing any previous handler.
    pub fn register<H>(&mut self, channel: impl Into<String>, handler: H) -> &mut Self
    where
        H: MethodCallHandler + 'static,
    {
        self.handlers.insert(channel.into(), Arc::new(handler));
        self
    }

    pub fn unregister(&mut self, channel: &str) -> bool {
        self.handlers.remove(channel).is_some()
    }

    pub fn has_channel(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    pub async fn dispatch(&self, channel: &str, call: MethodCall) -> MethodResult {
        match self.handlers.get(channel) {
            Some(handler) => handler.handle(call).await,
            None => {
                tracing::debug!(
                    channel = %channel,
                    method = %call.method,
                    "no handler for channel"
                );
                MethodResult::NotImplemented
            }
        }
    }
}

impl fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut channels: Vec<&String> = self.handlers.keys().collect();
        channels.sort();
        f.debug_struct("BridgeRegistry")
            .field("channels", &channels)
            .finish()
    }
}
