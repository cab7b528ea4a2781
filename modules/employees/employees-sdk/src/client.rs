//! `EmployeesClientV1` trait definition.
//!
//! This trait defines the public API of the `employees` module. Every
//! operation is backed by the remote employee service; aggregations run over
//! a single full listing.

use async_trait::async_trait;

use crate::errors::EmployeesError;
use crate::models::{Employee, NewEmployee};

/// Public API trait for the `employees` module.
#[async_trait]
pub trait EmployeesClientV1: Send + Sync {
    /// List every employee known to the upstream service.
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeesError>;

    /// Get an employee by ID.
    async fn fetch_by_id(&self, id: &str) -> Result<Employee, EmployeesError>;

    /// Case-insensitive substring search on employee names.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Employee>, EmployeesError>;

    /// Highest salary among all employees, `0` when there is none.
    async fn highest_salary(&self) -> Result<i64, EmployeesError>;

    /// Names of the ten best-paid employees, highest salary first.
    async fn top_ten_names_by_salary(&self) -> Result<Vec<String>, EmployeesError>;

    /// Create a new employee.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, EmployeesError>;

    /// Delete an employee by ID, returning the deleted employee's name.
    async fn delete_by_id(&self, id: &str) -> Result<String, EmployeesError>;
}
