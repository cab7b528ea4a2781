//! REST DTOs for the employees module.

use employees_sdk::{Employee, NewEmployee};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::problem::ValidationViolation;
use crate::domain::validation;

/// Employee as exposed over REST, using the upstream field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: String,
    pub employee_name: Option<String>,
    pub employee_salary: Option<i64>,
    pub employee_age: Option<i32>,
    pub employee_title: Option<String>,
    pub employee_email: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            employee_name: e.name,
            employee_salary: e.salary,
            employee_age: e.age,
            employee_title: e.title,
            employee_email: e.email,
        }
    }
}

/// Request body for creating an employee.
///
/// Every field is required; missing fields are reported as violations
/// rather than rejected by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateEmployeeReq {
    /// Must not be blank.
    pub name: Option<String>,
    /// Must be greater than zero.
    pub salary: Option<i64>,
    /// Between 16 and 75 inclusive.
    pub age: Option<i32>,
    /// Must not be blank.
    pub title: Option<String>,
}

impl CreateEmployeeReq {
    /// Check every field rule at once.
    ///
    /// # Errors
    /// All violations found, in field order.
    pub fn validate(self) -> Result<NewEmployee, Vec<ValidationViolation>> {
        let mut missing = Vec::new();
        for (field, present) in [
            ("name", self.name.is_some()),
            ("salary", self.salary.is_some()),
            ("age", self.age.is_some()),
            ("title", self.title.is_some()),
        ] {
            if !present {
                missing.push(field);
            }
        }

        let candidate = NewEmployee {
            name: self.name.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
        };

        let violations: Vec<ValidationViolation> = validation::violations(&candidate)
            .into_iter()
            .map(|v| ValidationViolation {
                field: v.field.to_owned(),
                message: if missing.contains(&v.field) {
                    "is required".to_owned()
                } else {
                    v.message
                },
            })
            .collect();

        if violations.is_empty() {
            Ok(candidate)
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_dto_uses_wire_names() {
        let dto = EmployeeDto::from(Employee {
            id: "1".to_owned(),
            name: Some("Tiger Nixon".to_owned()),
            salary: Some(320_800),
            age: Some(61),
            title: Some("Architect".to_owned()),
            email: Some("tnixon@company.com".to_owned()),
        });

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["employee_name"], "Tiger Nixon");
        assert_eq!(json["employee_salary"], 320_800);
        assert_eq!(json["employee_email"], "tnixon@company.com");
    }

    #[test]
    fn valid_request_becomes_new_employee() {
        let req: CreateEmployeeReq = serde_json::from_str(
            r#"{"name": "Jane", "salary": 1000, "age": 16, "title": "Intern"}"#,
        )
        .unwrap();

        let new = req.validate().unwrap();

        assert_eq!(new.name, "Jane");
        assert_eq!(new.age, 16);
    }

    #[test]
    fn missing_fields_are_reported_as_required() {
        let req: CreateEmployeeReq = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();

        let violations = req.validate().unwrap_err();

        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["salary", "age", "title"]);
        assert!(violations.iter().all(|v| v.message == "is required"));
    }

    #[test]
    fn out_of_range_values_keep_rule_message() {
        let req = CreateEmployeeReq {
            name: Some("Jane".to_owned()),
            salary: Some(-5),
            age: Some(80),
            title: Some("Boss".to_owned()),
        };

        let violations = req.validate().unwrap_err();

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, "must be greater than 0");
        assert_eq!(violations[1].message, "must be between 16 and 75");
    }
}
