use std::fmt;

/// Where a text generation attempt broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    Transport,
    /// The upstream answered with a non-success status.
    UpstreamStatus,
    /// The upstream body was not the expected completion shape.
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::UpstreamStatus => write!(f, "upstream_status"),
            FailureKind::MalformedResponse => write!(f, "malformed_response"),
        }
    }
}

/// Failure outcome of a text generation.
/// The detail is meant for server-side logs only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("text.generation_failed.{kind}: {detail}")]
pub struct TextGenerationError {
    pub kind: FailureKind,
    pub detail: String,
}

impl TextGenerationError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            detail: detail.into(),
        }
    }

    pub fn upstream_status(status: u16) -> Self {
        Self {
            kind: FailureKind::UpstreamStatus,
            detail: format!("upstream responded with status {}", status),
        }
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::MalformedResponse,
            detail: detail.into(),
        }
    }
}
