use async_trait::async_trait;
use employees_sdk::Employee;
use http::StatusCode;
use thiserror::Error;

/// Port to the remote employee service.
///
/// Each call is a single round trip; retries and caching are layered on top
/// by the domain service.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError>;

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError>;

    /// `payload` is forwarded verbatim as the JSON request body.
    async fn create(&self, payload: serde_json::Value) -> Result<Employee, UpstreamError>;

    async fn delete_by_name(&self, name: &str) -> Result<bool, UpstreamError>;
}

/// Failures talking to the remote employee service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Non-2xx response, network failure, timeout, or undecodable body.
    ///
    /// `status` is set whenever a response was received.
    #[error("upstream transport error (status {status:?}): {message}")]
    Transport {
        status: Option<StatusCode>,
        message: String,
    },

    /// Upstream answered 429 Too Many Requests.
    #[error("upstream rate limited: {message}")]
    RateLimited { message: String },

    /// Envelope decoded but carried no payload.
    #[error("upstream response envelope has no data")]
    MissingPayload,

    /// Request could not be built (bad base URL, unencodable body).
    #[error("invalid upstream request: {0}")]
    InvalidRequest(String),
}

impl UpstreamError {
    pub fn transport(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a transport failure, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_too_many_requests(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Transport failures worth another attempt: no response at all, a
    /// server error, or a 2xx body that failed to decode.
    ///
    /// Client errors (4xx) are answers, not noise, and are never retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { status: None, .. } => true,
            Self::Transport {
                status: Some(status),
                ..
            } => !status.is_client_error(),
            _ => false,
        }
    }
}
