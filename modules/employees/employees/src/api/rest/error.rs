//! REST error mapping for the employees module.

use axum::http::StatusCode;

use super::problem::{Problem, ValidationViolation};
use crate::domain::error::DomainError;

const ERROR_TYPE_BASE: &str = "https://errors.employee-facade.dev";

/// Map a domain error to a Problem for the request at `instance`.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let (status, code, title, detail) = match e {
        DomainError::NotFound { id } => (
            StatusCode::NOT_FOUND,
            "EMPLOYEES_NOT_FOUND",
            "Employee not found",
            format!("No employee with id {id}"),
        ),
        DomainError::RateLimited { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "EMPLOYEES_UPSTREAM_BUSY",
            "External service busy",
            "The employee service is rate limiting requests, try again later".to_owned(),
        ),
        DomainError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            "EMPLOYEES_VALIDATION",
            "Validation failed",
            format!("{field}: {message}"),
        ),
        DomainError::Upstream { .. } | DomainError::Internal { .. } => {
            tracing::error!(error = %e, "Unexpected error in employees");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMPLOYEES_INTERNAL",
                "Unexpected error",
                "An unexpected error occurred".to_owned(),
            )
        }
    };

    let mut problem = Problem::new(status, title, detail)
        .with_type(format!("{ERROR_TYPE_BASE}/{code}"))
        .with_code(code)
        .with_instance(instance);

    if let DomainError::Validation { field, message } = e {
        problem = problem.with_errors(vec![ValidationViolation {
            field: field.clone(),
            message: message.clone(),
        }]);
    }

    if let Some(id) = trace_id {
        problem = problem.with_trace_id(id);
    }

    problem
}

/// Problem for a create request that broke one or more field rules.
pub fn validation_problem(violations: Vec<ValidationViolation>, instance: &str) -> Problem {
    let detail = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");
    Problem::new(StatusCode::BAD_REQUEST, "Validation failed", detail)
        .with_type(format!("{ERROR_TYPE_BASE}/EMPLOYEES_VALIDATION"))
        .with_code("EMPLOYEES_VALIDATION")
        .with_instance(instance)
        .with_errors(violations)
}
