//! End-to-end method-call tests through the bridge registry.

use serde_json::{json, Value};
use shellbridge::channel::{BridgeRegistry, CookieChannel, MethodCall, MethodResult};
use shellbridge::cookies::access::{CookieAccessService, CookieRecord, DEFAULT_CHANNEL_NAME};
use shellbridge::cookies::canonical_cookie::CanonicalCookie;
use shellbridge::cookies::monster::CookieMonster;

fn bridge() -> (CookieMonster, BridgeRegistry) {
    let jar = CookieMonster::new();
    jar.set_canonical_cookie(CanonicalCookie::new("a", "1", "example.com", "/"));
    jar.set_canonical_cookie(CanonicalCookie::new("b", "2", "app.example.com", "/"));
    jar.set_canonical_cookie(CanonicalCookie::new("c", "3", "other.com", "/"));

    let channel = CookieChannel::new(CookieAccessService::new(jar.clone()));
    let mut registry = BridgeRegistry::new();
    registry.register(channel.channel_name().to_string(), channel);
    (jar, registry)
}

fn record_names(result: MethodResult) -> Vec<String> {
    let MethodResult::Success(value) = result else {
        panic!("Expected success, got {:?}", result);
    };
    let records: Vec<CookieRecord> = serde_json::from_value(value).unwrap();
    let mut names: Vec<String> = records.into_iter().map(|r| r.name).collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_scenario_over_channel() {
    let (jar, registry) = bridge();

    let result = registry
        .dispatch(
            DEFAULT_CHANNEL_NAME,
            MethodCall::new(
                "queryCookies",
                json!({ "domain": "example.com", "includeSubdomains": true }),
            ),
        )
        .await;
    assert_eq!(record_names(result), vec!["a", "b"]);

    let result = registry
        .dispatch(
            DEFAULT_CHANNEL_NAME,
            MethodCall::new(
                "queryCookies",
                json!({ "domain": "example.com", "includeSubdomains": false }),
            ),
        )
        .await;
    assert_eq!(record_names(result), vec!["a"]);

    let result = registry
        .dispatch(DEFAULT_CHANNEL_NAME, MethodCall::bare("clearAllCookies"))
        .await;
    assert_eq!(result, MethodResult::Success(Value::Bool(true)));
    assert_eq!(jar.total_cookie_count(), 0);
}

#[tokio::test]
async fn test_argument_errors_do_not_touch_store() {
    let (jar, registry) = bridge();

    for arguments in [
        Value::Null,
        json!({}),
        json!({ "domain": null }),
        json!({ "domain": ["example.com"] }),
    ] {
        let result = registry
            .dispatch(
                DEFAULT_CHANNEL_NAME,
                MethodCall::new("getCookies", arguments.clone()),
            )
            .await;
        assert_eq!(result.error_code(), Some("ARGUMENT_ERROR"), "arguments: {}", arguments);
    }

    assert_eq!(jar.total_cookie_count(), 3);
}

#[tokio::test]
async fn test_non_boolean_include_subdomains_uses_default() {
    let (_, registry) = bridge();

    for flag in [json!("false"), json!(1), json!(0), json!({})] {
        let result = registry
            .dispatch(
                DEFAULT_CHANNEL_NAME,
                MethodCall::new(
                    "getCookies",
                    json!({ "domain": "example.com", "includeSubdomains": flag.clone() }),
                ),
            )
            .await;
        assert_eq!(record_names(result), vec!["a", "b"], "includeSubdomains: {}", flag);
    }
}

#[tokio::test]
async fn test_session_cookies_omit_expiry_on_wire() {
    let (_, registry) = bridge();
    let result = registry
        .dispatch(
            DEFAULT_CHANNEL_NAME,
            MethodCall::new("getCookies", json!({ "domain": "other.com" })),
        )
        .await;

    let MethodResult::Success(Value::Array(items)) = result else {
        panic!("Expected array result");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "other.com");
    assert_eq!(items[0]["httpOnly"], false);
    assert!(items[0].get("expiresMs").is_none());
}

#[tokio::test]
async fn test_not_implemented_is_distinct() {
    let (_, registry) = bridge();

    let unknown_method = registry
        .dispatch(
            DEFAULT_CHANNEL_NAME,
            MethodCall::new("setBrightness", json!({ "brightness": 0.5 })),
        )
        .await;
    assert_eq!(unknown_method, MethodResult::NotImplemented);

    let unknown_channel = registry
        .dispatch(
            "soupreader/keep_screen_on",
            MethodCall::new("setEnabled", json!({ "enabled": true })),
        )
        .await;
    assert_eq!(unknown_channel, MethodResult::NotImplemented);
}
