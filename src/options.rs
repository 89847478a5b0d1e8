use crate::constants::DEFAULT_ALLOW_HEADERS;
use std::time::Duration;

/// Static CORS policy. Every field defaults to "off" / empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    /// Allow every origin. Origin patterns are not consulted.
    pub allow_all_origins: bool,
    /// Glob patterns (`*`, `?`) matched against the full `Origin` value.
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Vec<String>,
    /// Empty means [`DEFAULT_ALLOW_HEADERS`].
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Zero omits `Access-Control-Max-Age`.
    pub max_age: Duration,
}

impl CorsOptions {
    /// Allow-list used for `Access-Control-Allow-Headers`, falling back to the defaults.
    pub fn effective_allow_headers(&self) -> Vec<&str> {
        if self.allow_headers.is_empty() {
            DEFAULT_ALLOW_HEADERS.to_vec()
        } else {
            self.allow_headers.iter().map(String::as_str).collect()
        }
    }

    /// Exact, case-sensitive membership in `allow_methods`.
    pub fn allows_method(&self, requested: &str) -> bool {
        self.allow_methods.iter().any(|method| method == requested)
    }

    /// Case-insensitive membership in the effective allow-list.
    ///
    /// Only ASCII letters are folded; header names are ASCII tokens.
    pub fn allows_header(&self, requested: &str) -> bool {
        if self.allow_headers.is_empty() {
            header_listed(DEFAULT_ALLOW_HEADERS.as_slice(), requested)
        } else {
            header_listed(self.allow_headers.as_slice(), requested)
        }
    }
}

pub(crate) fn header_listed<S: AsRef<str>>(allowed: &[S], requested: &str) -> bool {
    allowed
        .iter()
        .any(|name| name.as_ref().eq_ignore_ascii_case(requested))
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
