use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use cors_glob::{Cors, CorsConfig, CorsDecision, OwnedRequestContext};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

const CORS_CONFIG: &str = r#"
allow_origins = ["http://localhost:*", "https://*.example.com"]
allow_credentials = true
allow_methods = ["GET", "POST"]
allow_headers = ["Content-Type", "X-Requested-With", "X-Example-Trace"]
expose_headers = ["X-Example-Trace"]
max_age_secs = 600
"#;

pub fn build_state() -> Result<AppState, Box<dyn std::error::Error>> {
    let config: CorsConfig = toml::from_str(CORS_CONFIG)?;
    let cors = Arc::new(Cors::from_config(config)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());

    match &decision {
        CorsDecision::Preflight(result) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
            decision.apply(response.headers_mut());
            response
        }
        CorsDecision::Simple(_) => {
            let mut response = next.run(request).await;
            decision.apply_if_absent(response.headers_mut());
            response
        }
    }
}
