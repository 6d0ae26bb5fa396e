use poem::error::InternalServerError;
use poem::http::StatusCode;
use poem::{Response, Result, handler};
use serde::Serialize;

/// Service descriptor served at `/`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub message: String,
    /// Service version
    pub version: String,
    /// Routes exposed besides `/`
    pub endpoints: Vec<String>,
    /// Always "operational" while the process serves requests
    pub status: String,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            message: "GlyphScript API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: vec!["/graphql".to_string()],
            status: "operational".to_string(),
        }
    }
}

/// Info endpoint, answered for any method.
#[handler]
pub fn info() -> Result<Response> {
    let body = serde_json::to_string(&ServiceInfo::current()).map_err(InternalServerError)?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .content_type("application/json")
        .body(body))
}
