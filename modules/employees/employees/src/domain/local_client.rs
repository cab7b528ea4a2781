use async_trait::async_trait;
use employees_sdk::{Employee, EmployeesClientV1, EmployeesError, NewEmployee};
use std::sync::Arc;

use crate::domain::service::Service;

/// In-process `EmployeesClientV1` backed by the domain service.
pub struct EmployeesLocalClient {
    service: Arc<Service>,
}

impl EmployeesLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmployeesClientV1 for EmployeesLocalClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeesError> {
        self.service.fetch_all().await.map_err(Into::into)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, EmployeesError> {
        self.service.fetch_by_id(id).await.map_err(Into::into)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Employee>, EmployeesError> {
        self.service.search_by_name(query).await.map_err(Into::into)
    }

    async fn highest_salary(&self) -> Result<i64, EmployeesError> {
        self.service.highest_salary().await.map_err(Into::into)
    }

    async fn top_ten_names_by_salary(&self) -> Result<Vec<String>, EmployeesError> {
        self.service
            .top_ten_names_by_salary()
            .await
            .map_err(Into::into)
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, EmployeesError> {
        self.service.create(new_employee).await.map_err(Into::into)
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, EmployeesError> {
        self.service.delete_by_id(id).await.map_err(Into::into)
    }
}
