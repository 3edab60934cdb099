//! Cookie query integration tests.

use shellbridge::cookies::access::{CookieAccessService, CookieRecord};
use shellbridge::cookies::canonical_cookie::CanonicalCookie;
use shellbridge::cookies::domain::matches;
use shellbridge::cookies::monster::CookieMonster;
use shellbridge::cookies::store::CookieStore;
use time::OffsetDateTime;

fn populated_jar() -> CookieMonster {
    let jar = CookieMonster::new();
    let expiry = OffsetDateTime::from_unix_timestamp(1_893_456_000).unwrap();

    jar.set_canonical_cookie(CanonicalCookie::new("a", "1", "example.com", "/"));
    jar.set_canonical_cookie(
        CanonicalCookie::new("b", "2", "app.example.com", "/").with_expiration(expiry),
    );
    jar.set_canonical_cookie(CanonicalCookie::new("c", "3", "other.com", "/"));
    jar.set_canonical_cookie(CanonicalCookie::new("d", "4", ".example.com", "/").with_secure(true));
    jar.set_canonical_cookie(CanonicalCookie::new("e", "5", " deep.app.example.com ", "/x"));
    jar
}

fn sorted_names(records: &[CookieRecord]) -> Vec<&str> {
    let mut names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_query_is_exact_matcher_subset() {
    let jar = populated_jar();
    let service = CookieAccessService::new(jar.clone());
    let all = jar.snapshot();

    for request in ["example.com", "app.example.com", "other.com", "", "nothing.test"] {
        for include_subdomains in [true, false] {
            let records = service.query_cookies(request, include_subdomains).await.unwrap();

            let mut expected: Vec<&str> = all
                .iter()
                .filter(|c| matches(&c.domain, request, include_subdomains))
                .map(|c| c.name.as_str())
                .collect();
            expected.sort();

            assert_eq!(
                sorted_names(&records),
                expected,
                "request={:?} include_subdomains={}",
                request,
                include_subdomains
            );
        }
    }
}

#[tokio::test]
async fn test_query_subdomain_scope() {
    let service = CookieAccessService::new(populated_jar());

    let records = service.query_cookies("example.com", true).await.unwrap();
    assert_eq!(sorted_names(&records), vec!["a", "b", "d", "e"]);

    let records = service.query_cookies("example.com", false).await.unwrap();
    assert_eq!(sorted_names(&records), vec!["a"]);

    // Parent-domain cookies are in scope for a subdomain request.
    let records = service.query_cookies("app.example.com", true).await.unwrap();
    assert_eq!(sorted_names(&records), vec!["a", "b", "d", "e"]);
}

#[tokio::test]
async fn test_query_never_mutates() {
    let jar = populated_jar();
    let service = CookieAccessService::new(jar.clone());
    let before = jar.get_all_cookies().await.unwrap();

    for _ in 0..5 {
        service.query_cookies("example.com", true).await.unwrap();
        service.query_cookies("", false).await.unwrap();
    }

    let after = jar.get_all_cookies().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_query_sees_store_changes() {
    let jar = CookieMonster::new();
    let service = CookieAccessService::new(jar.clone());
    assert!(service.query_cookies("example.com", true).await.unwrap().is_empty());

    jar.set_canonical_cookie(
        CanonicalCookie::new("fresh", "1", "example.com", "/").with_http_only(true),
    );

    let records = service.query_cookies("example.com", true).await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].http_only);
}

#[tokio::test]
async fn test_projection_of_persistent_cookie() {
    let jar = CookieMonster::new();
    // Wed, 21 Oct 2037 07:28:00 GMT
    let expiry = OffsetDateTime::from_unix_timestamp(2_139_722_880).unwrap();
    jar.set_canonical_cookie(
        CanonicalCookie::new("sid", "abc", "example.com", "/")
            .with_secure(true)
            .with_expiration(expiry),
    );

    let service = CookieAccessService::new(jar);
    let records = service.query_cookies("example.com", false).await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.name, "sid");
    assert_eq!(record.value, "abc");
    assert_eq!(record.domain, "example.com");
    assert_eq!(record.path, "/");
    assert!(record.secure);
    assert!(!record.http_only);
    assert_eq!(record.expires_ms, Some(2_139_722_880_000));
}
