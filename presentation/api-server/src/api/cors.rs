use poem::http::{Method, StatusCode, header};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::config::cors_config::CorsConfig;

/// Answers every `OPTIONS` request as a CORS preflight and stamps the
/// allow-* headers on every other response, errors included.
pub struct CorsHeaders {
    config: CorsConfig,
}

impl CorsHeaders {
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

impl<E: Endpoint> Middleware<E> for CorsHeaders {
    type Output = CorsHeadersEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        CorsHeadersEndpoint {
            inner: ep,
            config: self.config.clone(),
        }
    }
}

pub struct CorsHeadersEndpoint<E> {
    inner: E,
    config: CorsConfig,
}

impl<E> CorsHeadersEndpoint<E> {
    fn preflight(&self) -> Response {
        Response::builder()
            .status(StatusCode::OK)
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.config.allow_origin.clone())
            .header(header::ACCESS_CONTROL_ALLOW_METHODS, self.config.allow_methods.clone())
            .header(header::ACCESS_CONTROL_ALLOW_HEADERS, self.config.allow_headers.clone())
            .header(header::ACCESS_CONTROL_MAX_AGE, self.config.max_age.clone())
            .finish()
    }

    fn apply(&self, mut resp: Response) -> Response {
        let headers = resp.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.config.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.allow_methods.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.config.allow_headers.clone(),
        );
        resp
    }
}

impl<E: Endpoint> Endpoint for CorsHeadersEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if req.method() == Method::OPTIONS {
            return Ok(self.preflight());
        }

        let resp = match self.inner.call(req).await {
            Ok(resp) => resp.into_response(),
            Err(err) => err.into_response(),
        };

        Ok(self.apply(resp))
    }
}
