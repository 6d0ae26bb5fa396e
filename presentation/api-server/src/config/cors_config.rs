use anyhow::Context;
use poem::http::HeaderValue;

use super::env::parse_or;

const DEFAULT_ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const DEFAULT_MAX_AGE_SECS: u32 = 86400;

/// Header values attached by the CORS middleware.
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGIN: value of Access-Control-Allow-Origin (default: "*")
///
/// Methods, headers and the preflight max age are fixed:
/// `GET, POST, OPTIONS`, `Content-Type, Authorization`, 86400 seconds.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origin: HeaderValue,
    pub allow_methods: HeaderValue,
    pub allow_headers: HeaderValue,
    pub max_age: HeaderValue,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static(DEFAULT_ALLOWED_METHODS),
            allow_headers: HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS),
            max_age: HeaderValue::from(DEFAULT_MAX_AGE_SECS),
        }
    }
}

impl CorsConfig {
    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin: String = parse_or(lookup, "CORS_ALLOWED_ORIGIN", "*".to_string())?;
        let allow_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("invalid value for CORS_ALLOWED_ORIGIN: {origin:?}"))?;

        Ok(Self {
            allow_origin,
            ..Self::default()
        })
    }
}
