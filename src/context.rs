use crate::constants::method;

/// Borrowed view of the parts of an inbound request the filter inspects.
///
/// Absent headers are represented by empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl RequestContext<'_> {
    /// An `OPTIONS` request carrying at least one of the preflight request headers.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
            && (!self.access_control_request_method.is_empty()
                || !self.access_control_request_headers.is_empty())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
