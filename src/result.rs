use crate::headers::Headers;
use crate::origin::PatternError;
use thiserror::Error;

/// Headers and status that terminate a preflight request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers merged into the downstream response of an actual request.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Outcome of evaluating one request.
///
/// `Preflight` ends the request without calling the next handler; `Simple` continues.
/// A disallowed origin produces either variant with an empty header set.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(result) => &result.headers,
            CorsDecision::Simple(result) => &result.headers,
        }
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }
}

/// Errors raised while building a [`crate::Cors`] from its options.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid origin pattern `{pattern}`: {source}")]
    InvalidOriginPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}
