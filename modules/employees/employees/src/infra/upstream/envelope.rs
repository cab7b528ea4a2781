//! Wire format of the remote employee service.

use employees_sdk::Employee;
use serde::{Deserialize, Serialize};

use crate::domain::gateway::UpstreamError;

/// Response wrapper used by every upstream endpoint:
/// `{"data": <payload>, "status": "..."}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
}

impl<T> Envelope<T> {
    /// Discard the status and yield the payload.
    ///
    /// # Errors
    /// `UpstreamError::MissingPayload` when `data` is absent or `null`.
    pub fn into_data(self) -> Result<T, UpstreamError> {
        self.data.ok_or(UpstreamError::MissingPayload)
    }
}

/// Employee as serialized by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_salary: Option<i64>,
    #[serde(default)]
    pub employee_age: Option<i32>,
    #[serde(default)]
    pub employee_title: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
}

impl From<EmployeeRecord> for Employee {
    fn from(r: EmployeeRecord) -> Self {
        Self {
            id: r.id,
            name: r.employee_name,
            salary: r.employee_salary,
            age: r.employee_age,
            title: r.employee_title,
            email: r.employee_email,
        }
    }
}
