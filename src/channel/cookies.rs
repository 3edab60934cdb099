//! Method-call handler for the web view cookie channel.

use crate::base::bridgeerror::BridgeError;
use crate::channel::call::{MethodCall, MethodResult};
use crate::channel::{HandlerFuture, MethodCallHandler};
use crate::cookies::access::CookieAccessService;
use crate::cookies::store::CookieStore;
use serde_json::Value;
use std::sync::Arc;

pub const METHOD_QUERY_COOKIES: &str = "queryCookies";
/// Wire name used by existing shells for [`METHOD_QUERY_COOKIES`].
pub const METHOD_GET_COOKIES: &str = "getCookies";
pub const METHOD_CLEAR_ALL_COOKIES: &str = "clearAllCookies";

/// Routes `queryCookies` / `clearAllCookies` calls to a [`CookieAccessService`].
pub struct CookieChannel<S> {
    service: Arc<CookieAccessService<S>>,
}

impl<S> Clone for CookieChannel<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: CookieStore + 'static> CookieChannel<S> {
    pub fn new(service: CookieAccessService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &CookieAccessService<S> {
        &self.service
    }

    /// Channel name taken from the service configuration.
    pub fn channel_name(&self) -> &str {
        &self.service.config().channel_name
    }

    async fn dispatch(
        service: &CookieAccessService<S>,
        call: &MethodCall,
    ) -> Result<Value, BridgeError> {
        match call.method.as_str() {
            METHOD_QUERY_COOKIES | METHOD_GET_COOKIES => {
                // Validate before touching the store.
                let domain = call.required_str("domain")?;
                let include_subdomains = call.optional_bool("includeSubdomains", true);

                let records = service.query_cookies(domain, include_subdomains).await?;
                serde_json::to_value(records)
                    .map_err(|e| BridgeError::store_unavailable(format!("encode cookies: {}", e)))
            }
            METHOD_CLEAR_ALL_COOKIES => {
                let cleared = service.clear_all_cookies().await?;
                Ok(Value::Bool(cleared))
            }
            other => Err(BridgeError::unsupported(other)),
        }
    }
}

impl<S: CookieStore + 'static> MethodCallHandler for CookieChannel<S> {
    fn handle(&self, call: MethodCall) -> HandlerFuture {
        let service = Arc::clone(&self.service);
        Box::pin(async move {
            let result = Self::dispatch(&service, &call).await;
            if let Err(e) = &result {
                tracing::debug!(
                    method = %call.method,
                    code = e.code(),
                    error = %e,
                    "cookie call failed"
                );
            }
            MethodResult::from(result)
        })
    }
}
