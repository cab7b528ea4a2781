use employees_sdk::EmployeesError;
use thiserror::Error;

use crate::domain::gateway::UpstreamError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Employee with id {id} not found")]
    NotFound { id: String },

    #[error("Employee service busy: {message}")]
    RateLimited { message: String },

    #[error("Upstream failure (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Upstream failures that reach the domain boundary unmapped.
///
/// Not-found handling is operation specific and happens in the service
/// before this conversion applies.
impl From<UpstreamError> for DomainError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::RateLimited { message } => Self::RateLimited { message },
            UpstreamError::Transport { status, message } => Self::Upstream {
                status: status.map(|s| s.as_u16()),
                message,
            },
            other @ (UpstreamError::MissingPayload | UpstreamError::InvalidRequest(_)) => {
                Self::internal(other.to_string())
            }
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for EmployeesError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::NotFound { id } => EmployeesError::not_found(id),
            DomainError::RateLimited { message } => EmployeesError::rate_limited(message),
            DomainError::Upstream { status, message } => EmployeesError::upstream(status, message),
            DomainError::Validation { field, message } => {
                EmployeesError::validation(format!("{field}: {message}"))
            }
            DomainError::Internal { .. } => EmployeesError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn rate_limit_survives_conversion() {
        let err: DomainError = UpstreamError::RateLimited {
            message: "busy".to_owned(),
        }
        .into();
        assert_eq!(err, DomainError::rate_limited("busy"));
    }

    #[test]
    fn transport_keeps_status_code() {
        let err: DomainError =
            UpstreamError::transport(Some(StatusCode::BAD_GATEWAY), "proxy down").into();
        assert_eq!(
            err,
            DomainError::Upstream {
                status: Some(502),
                message: "proxy down".to_owned()
            }
        );
    }

    #[test]
    fn missing_payload_is_internal() {
        let err: DomainError = UpstreamError::MissingPayload.into();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[test]
    fn internal_detail_is_not_exposed_through_sdk() {
        let sdk: EmployeesError = DomainError::internal("decoder exploded").into();
        assert_eq!(sdk, EmployeesError::Internal);
    }
}
