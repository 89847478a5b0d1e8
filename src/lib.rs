//! Stateless CORS filter core.
//!
//! A [`Cors`] is built once from [`CorsOptions`] (or a deserialized
//! [`CorsConfig`]) and then evaluated per request, yielding a [`CorsDecision`]:
//! either a preflight answer that ends the request, or headers to merge into
//! the downstream response. Allowed origins are glob patterns such as
//! `https://*.example.com`.

mod config;
pub mod constants;
mod context;
mod cors;
mod filter;
mod header_builder;
mod headers;
mod options;
mod origin;
mod result;

pub use config::CorsConfig;
pub use context::RequestContext;
pub use cors::Cors;
pub use filter::OwnedRequestContext;
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{OriginMatcher, OriginPattern, PatternError};
pub use result::{CorsDecision, PreflightResult, SimpleResult, ValidationError};
