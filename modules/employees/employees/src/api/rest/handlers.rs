//! REST handlers for the employees module.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::{StatusCode, Uri};

use super::dto::{CreateEmployeeReq, EmployeeDto};
use super::error::{domain_error_to_problem, validation_problem};
use super::problem::Problem;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

pub type ApiResult<T> = Result<T, Problem>;

fn to_problem(uri: &Uri) -> impl FnOnce(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// GET /api/v1/employee
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    tag = "Employees",
    operation_id = "employees.list",
    responses(
        (status = 200, description = "All employees", body = [EmployeeDto]),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn list_employees(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let employees = svc.fetch_all().await.map_err(to_problem(&uri))?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/employee/search/{name}
#[utoipa::path(
    get,
    path = "/api/v1/employee/search/{name}",
    tag = "Employees",
    operation_id = "employees.search_by_name",
    params(("name" = String, Path, description = "Case-insensitive name fragment")),
    responses(
        (status = 200, description = "Employees whose name contains the fragment", body = [EmployeeDto]),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn search_employees(
    Extension(svc): Extension<Arc<Service>>,
    Path(name): Path<String>,
    uri: Uri,
) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let found = svc.search_by_name(&name).await.map_err(to_problem(&uri))?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/employee/{id}
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    tag = "Employees",
    operation_id = "employees.get",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn get_employee(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
) -> ApiResult<Json<EmployeeDto>> {
    let employee = svc.fetch_by_id(&id).await.map_err(to_problem(&uri))?;
    Ok(Json(employee.into()))
}

/// GET /api/v1/employee/highestSalary
#[utoipa::path(
    get,
    path = "/api/v1/employee/highestSalary",
    tag = "Employees",
    operation_id = "employees.highest_salary",
    responses(
        (status = 200, description = "Highest salary, 0 when there are no salaries", body = i64),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn highest_salary(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<Json<i64>> {
    let highest = svc.highest_salary().await.map_err(to_problem(&uri))?;
    Ok(Json(highest))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
#[utoipa::path(
    get,
    path = "/api/v1/employee/topTenHighestEarningEmployeeNames",
    tag = "Employees",
    operation_id = "employees.top_ten_names",
    responses(
        (status = 200, description = "Names of the ten best-paid employees", body = [String]),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn top_ten_names(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<Json<Vec<String>>> {
    let names = svc
        .top_ten_names_by_salary()
        .await
        .map_err(to_problem(&uri))?;
    Ok(Json(names))
}

/// POST /api/v1/employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    tag = "Employees",
    operation_id = "employees.create",
    request_body = CreateEmployeeReq,
    responses(
        (status = 200, description = "Created employee", body = EmployeeDto),
        (status = 400, description = "Invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri, body))]
pub async fn create_employee(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    body: Result<Json<CreateEmployeeReq>, JsonRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let Json(req) = body.map_err(|rejection| {
        Problem::new(
            StatusCode::BAD_REQUEST,
            "Malformed request body",
            rejection.body_text(),
        )
        .with_code("EMPLOYEES_BAD_REQUEST")
        .with_instance(uri.path())
    })?;

    let new = req
        .validate()
        .map_err(|violations| validation_problem(violations, uri.path()))?;

    let created = svc.create(new).await.map_err(to_problem(&uri))?;
    Ok(Json(created.into()))
}

/// DELETE /api/v1/employee/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    tag = "Employees",
    operation_id = "employees.delete",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Name of the deleted employee", body = String, content_type = "text/plain"),
        (status = 404, description = "Employee not found", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Upstream busy", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn delete_employee(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
) -> ApiResult<String> {
    svc.delete_by_id(&id).await.map_err(to_problem(&uri))
}
