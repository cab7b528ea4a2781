use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use super::dto::{CreateEmployeeReq, EmployeeDto};
use super::handlers;
use super::problem::{Problem, ValidationViolation};
use crate::domain::service::Service;

/// OpenAPI description of the employee endpoints.
#[derive(OpenApi)]
#[openapi(
    info(title = "Employee facade", description = "Employee queries over the remote employee service"),
    paths(
        handlers::list_employees,
        handlers::search_employees,
        handlers::get_employee,
        handlers::highest_salary,
        handlers::top_ten_names,
        handlers::create_employee,
        handlers::delete_employee,
    ),
    components(schemas(EmployeeDto, CreateEmployeeReq, Problem, ValidationViolation)),
    tags((name = "Employees", description = "Employee queries and mutations"))
)]
pub struct EmployeesApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(EmployeesApi::openapi())
}

#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let employees = Router::new()
        .route(
            "/api/v1/employee",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/api/v1/employee/search/{name}",
            get(handlers::search_employees),
        )
        .route(
            "/api/v1/employee/highestSalary",
            get(handlers::highest_salary),
        )
        .route(
            "/api/v1/employee/topTenHighestEarningEmployeeNames",
            get(handlers::top_ten_names),
        )
        .route(
            "/api/v1/employee/{id}",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(service));

    router.merge(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmployeesConfig;
    use crate::domain::gateway::{EmployeeGateway, UpstreamError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use employees_sdk::Employee;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Fixed upstream: two employees, rate limits anything named "busy".
    struct StubGateway;

    fn stub_employees() -> Vec<Employee> {
        vec![
            Employee {
                id: "1".to_owned(),
                name: Some("Alice".to_owned()),
                salary: Some(5000),
                ..Employee::default()
            },
            Employee {
                id: "2".to_owned(),
                name: Some("Bob".to_owned()),
                salary: Some(8000),
                ..Employee::default()
            },
        ]
    }

    #[async_trait]
    impl EmployeeGateway for StubGateway {
        async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
            Ok(stub_employees())
        }

        async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
            if id == "busy" {
                return Err(UpstreamError::transport(
                    Some(StatusCode::TOO_MANY_REQUESTS),
                    "slow down",
                ));
            }
            stub_employees()
                .into_iter()
                .find(|e| e.id == id)
                .ok_or(UpstreamError::MissingPayload)
        }

        async fn create(&self, payload: Value) -> Result<Employee, UpstreamError> {
            Ok(Employee {
                id: "3".to_owned(),
                name: payload["name"].as_str().map(str::to_owned),
                salary: payload["salary"].as_i64(),
                ..Employee::default()
            })
        }

        async fn delete_by_name(&self, _name: &str) -> Result<bool, UpstreamError> {
            Ok(true)
        }
    }

    fn app() -> Router {
        let service = Arc::new(Service::new(
            Arc::new(StubGateway),
            &EmployeesConfig::default(),
        ));
        register_routes(Router::new(), service)
    }

    async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = app().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned())
            .unwrap_or_default();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, bytes)
    }

    #[tokio::test]
    async fn lists_employees_with_wire_names() {
        let (status, _, body) = call(Method::GET, "/api/v1/employee", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[1]["employee_name"], "Bob");
        assert_eq!(json[1]["employee_salary"], 8000);
    }

    #[tokio::test]
    async fn static_paths_win_over_id() {
        let (status, _, body) = call(Method::GET, "/api/v1/employee/highestSalary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"8000");

        let (status, _, body) = call(
            Method::GET,
            "/api/v1/employee/topTenHighestEarningEmployeeNames",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let (status, _, body) = call(Method::GET, "/api/v1/employee/search/ALI", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["id"], "1");
    }

    #[tokio::test]
    async fn unknown_id_is_404_problem() {
        let (status, content_type, body) = call(Method::GET, "/api/v1/employee/99", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/problem+json");
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "Employee not found");
        assert_eq!(json["instance"], "/api/v1/employee/99");
    }

    #[tokio::test]
    async fn rate_limited_upstream_is_503() {
        let (status, _, body) = call(Method::GET, "/api/v1/employee/busy", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "External service busy");
    }

    #[tokio::test]
    async fn create_returns_employee() {
        let (status, _, body) = call(
            Method::POST,
            "/api/v1/employee",
            Some(json!({"name": "Cleo", "salary": 9000, "age": 40, "title": "Lead"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["employee_name"], "Cleo");
    }

    #[tokio::test]
    async fn create_with_invalid_fields_is_400_with_violations() {
        let (status, content_type, body) = call(
            Method::POST,
            "/api/v1/employee",
            Some(json!({"name": "", "salary": 0, "age": 10})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type, "application/problem+json");
        let json: Value = serde_json::from_slice(&body).unwrap();
        let fields: Vec<&str> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "salary", "age", "title"]);
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_400() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/employee")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_returns_name_as_text() {
        let (status, content_type, body) = call(Method::DELETE, "/api/v1/employee/2", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, b"Bob");
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let (status, _, body) = call(Method::GET, "/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"]["/api/v1/employee/{id}"]["get"].is_object());
        assert!(json["components"]["schemas"]["EmployeeDto"].is_object());
    }
}
