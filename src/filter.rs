use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::CorsDecision;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use tracing::warn;

/// Owned copy of the request fields the filter reads, for hosts that cannot
/// borrow from the request while also handing it to the next handler.
#[derive(Debug, Clone, Default)]
pub struct OwnedRequestContext {
    method: String,
    origin: String,
    access_control_request_method: String,
    access_control_request_headers: String,
}

impl OwnedRequestContext {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }

    /// Missing headers and values that are not visible ASCII are read as empty.
    pub fn from_parts(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: &self.origin,
            access_control_request_method: &self.access_control_request_method,
            access_control_request_headers: &self.access_control_request_headers,
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .unwrap_or_default()
}

impl CorsDecision {
    /// Inserts every computed header, replacing values already present under the same name.
    pub fn apply(&self, map: &mut HeaderMap) {
        apply_headers(map, self.headers());
    }

    /// Inserts only the computed headers whose names are not set yet.
    ///
    /// Use this on a response produced by the downstream handler so that its
    /// own values win over the computed ones.
    pub fn apply_if_absent(&self, map: &mut HeaderMap) {
        apply_headers_if_absent(map, self.headers());
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in encoded(headers) {
        map.insert(name, value);
    }
}

fn apply_headers_if_absent(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in encoded(headers) {
        map.entry(name).or_insert(value);
    }
}

fn encoded(headers: &Headers) -> impl Iterator<Item = (HeaderName, HeaderValue)> + '_ {
    headers.iter().filter_map(|(name, value)| {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => Some((header_name, header_value)),
            _ => {
                warn!(
                    header = %name,
                    value = %value,
                    "skipping CORS header that is not a valid HTTP header"
                );
                None
            }
        }
    })
}

impl Cors {
    /// Runs the filter around `next`.
    ///
    /// A preflight is answered directly with an empty `200 OK` and `next` is
    /// never called. Any other request is passed to `next` unchanged and the
    /// computed headers are merged into the response it returns; headers the
    /// handler already set are left as they are.
    pub fn allow<B, R, F>(&self, request: Request<B>, next: F) -> Response<R>
    where
        R: Default,
        F: FnOnce(Request<B>) -> Response<R>,
    {
        let owned = OwnedRequestContext::from_request(&request);
        match self.check(&owned.as_request_context()) {
            CorsDecision::Preflight(result) => {
                let mut response = Response::new(R::default());
                *response.status_mut() =
                    StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
                apply_headers(response.headers_mut(), &result.headers);
                response
            }
            CorsDecision::Simple(result) => {
                let mut response = next(request);
                apply_headers_if_absent(response.headers_mut(), &result.headers);
                response
            }
        }
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
