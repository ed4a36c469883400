use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single fetch against the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("failed to reach weather provider")]
    Transport(#[source] reqwest::Error),

    /// The body did not have the expected shape.
    #[error("failed to parse weather response: {0}")]
    Parse(String),
}

/// The two failure classes a caller can distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkOrHttp,
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Status { .. } | FetchError::Transport(_) => ErrorKind::NetworkOrHttp,
            FetchError::Parse(_) => ErrorKind::Parse,
        }
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    /// HTTP status, if the provider answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
