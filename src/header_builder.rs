use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, header_listed};

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Echoes the origin; an absent origin becomes `*`.
    pub(crate) fn build_simple_origin_header(&self, origin: &str) -> HeaderCollection {
        let value = if origin.is_empty() { "*" } else { origin };
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.to_string());
        headers
    }

    /// Echoes the origin verbatim. Only an allow-all policy turns an absent origin into `*`;
    /// a pattern that happens to match the empty string echoes it as empty.
    pub(crate) fn build_preflight_origin_header(&self, origin: &str) -> HeaderCollection {
        let value = if origin.is_empty() && self.options.allow_all_origins {
            "*"
        } else {
            origin
        };
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.to_string());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if self.options.allow_methods.is_empty() {
            return HeaderCollection::new();
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.allow_methods.join(","),
        );
        headers
    }

    /// Full method list, but only when the requested method is one of them.
    pub(crate) fn build_preflight_methods_header(&self, requested_method: &str) -> HeaderCollection {
        if self.options.allows_method(requested_method) {
            self.build_methods_header()
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.effective_allow_headers().join(","),
        );
        headers
    }

    /// Requested headers that are allowed, in request order and request casing.
    pub(crate) fn build_preflight_allowed_headers(&self, requested_headers: &str) -> HeaderCollection {
        let effective = self.options.effective_allow_headers();
        let allowed = requested_headers
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty() && header_listed(effective.as_slice(), value))
            .collect::<Vec<_>>();

        if allowed.is_empty() {
            return HeaderCollection::new();
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.join(","));
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if self.options.expose_headers.is_empty() {
            return HeaderCollection::new();
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.expose_headers.join(","),
        );
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if self.options.max_age.is_zero() {
            return HeaderCollection::new();
        }
        // Sub-second remainders truncate, so 999ms is emitted as "0".
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.as_secs().to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
