//! Domain scoping for cookie queries.
//!
//! Decides whether a stored cookie's domain falls within a requested domain
//! scope. Unlike RFC 6265 request matching (which asks "does this cookie go
//! to this host?"), scoping is symmetric when subdomains are included: a
//! cookie on `app.example.com` is inside a request for `example.com`, and a
//! cookie on `.example.com` is inside a request for `app.example.com`.
//!
//! Matching is plain suffix logic. No wildcard or pattern syntax is
//! interpreted. A leading dot on a cookie domain marks a domain cookie: it
//! is ignored when checking whether the request is a subdomain of the
//! cookie's domain, and kept everywhere else.
//!
//! # Example
//!
//! ```rust
//! use shellbridge::cookies::domain::matches;
//!
//! assert!(matches("app.example.com", "example.com", true));
//! assert!(matches("example.com", "app.example.com", true));
//! assert!(!matches("app.example.com", "example.com", false));
//! assert!(matches("other.com", "  ", false)); // empty request matches all
//! ```

/// Case-sensitive domain scope check.
///
/// Both inputs are trimmed before comparison. An empty (after trimming)
/// `requested_domain` matches every cookie.
pub fn matches(cookie_domain: &str, requested_domain: &str, include_subdomains: bool) -> bool {
    DomainMatcher::default().matches(cookie_domain, requested_domain, include_subdomains)
}

/// Domain scope matcher with configurable case handling.
///
/// The default matcher compares case-sensitively. Real cookie domains are
/// case-insensitive, so hosts that store mixed-case domains can opt into
/// ASCII case folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainMatcher {
    case_insensitive: bool,
}

impl DomainMatcher {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    pub fn case_insensitive() -> Self {
        Self::new(true)
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn matches(
        &self,
        cookie_domain: &str,
        requested_domain: &str,
        include_subdomains: bool,
    ) -> bool {
        let cookie_domain = cookie_domain.trim();
        let requested = requested_domain.trim();

        if requested.is_empty() {
            return true;
        }

        if self.domain_eq(cookie_domain, requested) {
            return true;
        }

        if !include_subdomains {
            return false;
        }

        // Cookie is a subdomain of the request, or the request is a
        // subdomain of the cookie's (parent) domain.
        let parent = cookie_domain.strip_prefix('.').unwrap_or(cookie_domain);
        self.is_dot_suffix(cookie_domain, requested) || self.is_dot_suffix(requested, parent)
    }

    fn domain_eq(&self, a: &str, b: &str) -> bool {
        if self.case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }

    /// Whether `s` ends with `"." + suffix`.
    fn is_dot_suffix(&self, s: &str, suffix: &str) -> bool {
        if s.len() <= suffix.len() {
            return false;
        }

        let split = s.len() - suffix.len();
        // The byte before the suffix must be a dot. Since '.' is ASCII,
        // `split` is then guaranteed to be a char boundary.
        if s.as_bytes()[split - 1] != b'.' {
            return false;
        }

        self.domain_eq(&s[split..], suffix)
    }
}
