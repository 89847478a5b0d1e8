use crate::config::CorsConfig;
use crate::constants::PREFLIGHT_STATUS;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::origin::OriginMatcher;
use crate::result::{CorsDecision, PreflightResult, SimpleResult, ValidationError};
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Origin patterns are compiled once here and never change afterwards, so a
/// single `Cors` can be shared across threads behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Cors {
    options: CorsOptions,
    matcher: OriginMatcher,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        let matcher = OriginMatcher::compile(&options.allow_origins)?;
        Ok(Self { options, matcher })
    }

    pub fn from_config(config: CorsConfig) -> Result<Self, ValidationError> {
        Self::new(config.into())
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Tests `origin` against the compiled `allow_origins` patterns only.
    ///
    /// `allow_all_origins` is not consulted here.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.matcher.matches(origin)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.is_preflight() {
            trace!(origin = request.origin, "evaluating CORS preflight");
            CorsDecision::Preflight(PreflightResult {
                headers: self.preflight_headers(
                    request.origin,
                    request.access_control_request_method,
                    request.access_control_request_headers,
                ),
                status: PREFLIGHT_STATUS,
            })
        } else {
            trace!(origin = request.origin, method = request.method, "evaluating CORS request");
            CorsDecision::Simple(SimpleResult {
                headers: self.simple_headers(request.origin),
            })
        }
    }

    /// Headers for an actual (non-preflight) response.
    pub fn simple_headers(&self, origin: &str) -> Headers {
        if !self.origin_permitted(origin) {
            return Headers::new();
        }

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_simple_origin_header(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_max_age_header());
        headers.into_headers()
    }

    /// Headers for a preflight response.
    pub fn preflight_headers(
        &self,
        origin: &str,
        requested_method: &str,
        requested_headers: &str,
    ) -> Headers {
        if !self.origin_permitted(origin) {
            return Headers::new();
        }

        if !requested_method.is_empty() && !self.options.allows_method(requested_method) {
            debug!(
                origin,
                requested_method, "CORS preflight requested a method outside the allow list"
            );
        }

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_preflight_methods_header(requested_method));
        headers.extend(builder.build_preflight_allowed_headers(requested_headers));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_preflight_origin_header(origin));
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_max_age_header());
        headers.into_headers()
    }

    fn origin_permitted(&self, origin: &str) -> bool {
        if self.options.allow_all_origins || self.is_origin_allowed(origin) {
            return true;
        }
        debug!(origin, "CORS origin not allowed, omitting CORS headers");
        false
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
