use time::OffsetDateTime;

/// Represents a cookie held by a web view cookie store.
/// Modeled after Chromium's `net::CanonicalCookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    /// Raw domain as reported by the store. May carry surrounding whitespace.
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    /// `None` for session cookies.
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
}

/// Identity of a cookie inside a store: name + domain + path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CookieKey {
    pub name: String,
    pub domain: String,
    pub path: String,
}

impl CanonicalCookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            creation_time: OffsetDateTime::now_utc(),
            expiration_time: None,
            secure: false,
            http_only: false,
        }
    }

    pub fn with_expiration(mut self, expiration_time: OffsetDateTime) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn key(&self) -> CookieKey {
        CookieKey {
            name: self.name.clone(),
            domain: self.domain.clone(),
            path: self.path.clone(),
        }
    }

    pub fn is_session(&self) -> bool {
        self.expiration_time.is_none()
    }

    /// Expiry as milliseconds since the Unix epoch, truncated toward zero.
    pub fn expires_ms(&self) -> Option<i64> {
        self.expiration_time
            .map(|t| (t.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}
