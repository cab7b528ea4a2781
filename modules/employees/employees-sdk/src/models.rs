//! Public models for the employees module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the employees module and its consumers. Wire formats live in the
//! module's REST and upstream layers.

/// An employee record as reported by the upstream employee service.
///
/// `name` and `salary` are optional because the upstream does not guarantee
/// them; aggregations treat a missing value as undefined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Employee {
    pub id: String,
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i32>,
    pub title: Option<String>,
    pub email: Option<String>,
}

/// Data for creating a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i64,
    pub age: i32,
    pub title: String,
}
