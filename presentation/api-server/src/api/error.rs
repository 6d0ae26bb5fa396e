use std::any::Any;

use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use serde::Serialize;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
const NOT_FOUND: &str = "Not Found";

/// Body of every 500 produced by the error boundary.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Builds the 500 JSON response. With `expose_details` off the message is
/// replaced by the generic error name.
pub fn internal_error_response(message: &str, expose_details: bool) -> Response {
    let body = ErrorResponse {
        error: INTERNAL_SERVER_ERROR.to_string(),
        message: if expose_details {
            message.to_string()
        } else {
            INTERNAL_SERVER_ERROR.to_string()
        },
    };

    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| format!(r#"{{"error":"{INTERNAL_SERVER_ERROR}"}}"#));

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .content_type("application/json")
        .body(json)
}

pub fn not_found_response() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .content_type("text/plain")
        .body(NOT_FOUND)
}

/// Extracts a printable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}

/// Turns every error escaping the routes into a response:
/// unknown routes become `404 Not Found`, other client errors keep their
/// status, everything else becomes the 500 JSON body.
pub struct ErrorBoundary {
    expose_details: bool,
}

impl ErrorBoundary {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

impl<E: Endpoint> Middleware<E> for ErrorBoundary {
    type Output = ErrorBoundaryEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorBoundaryEndpoint {
            inner: ep,
            expose_details: self.expose_details,
        }
    }
}

pub struct ErrorBoundaryEndpoint<E> {
    inner: E,
    expose_details: bool,
}

impl<E: Endpoint> Endpoint for ErrorBoundaryEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        match self.inner.call(req).await {
            Ok(resp) => Ok(resp.into_response()),
            Err(err) => {
                let status = err.status();
                if status == StatusCode::NOT_FOUND {
                    Ok(not_found_response())
                } else if status.is_client_error() {
                    Ok(err.into_response())
                } else {
                    tracing::error!(error = %err, status = %status, "Server error");
                    Ok(internal_error_response(&err.to_string(), self.expose_details))
                }
            }
        }
    }
}
