use employees_sdk::NewEmployee;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 75;

/// A single rule broken by a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every rule `new` breaks, in field order. Empty means valid.
#[must_use]
pub fn violations(new: &NewEmployee) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    if new.name.trim().is_empty() {
        out.push(FieldViolation::new("name", "must not be blank"));
    }
    if new.salary <= 0 {
        out.push(FieldViolation::new("salary", "must be greater than 0"));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&new.age) {
        out.push(FieldViolation::new(
            "age",
            format!("must be between {MIN_AGE} and {MAX_AGE}"),
        ));
    }
    if new.title.trim().is_empty() {
        out.push(FieldViolation::new("title", "must not be blank"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewEmployee {
        NewEmployee {
            name: "Jane Doe".to_owned(),
            salary: 120_000,
            age: 34,
            title: "Engineer".to_owned(),
        }
    }

    #[test]
    fn valid_request_has_no_violations() {
        assert!(violations(&valid()).is_empty());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in [MIN_AGE, MAX_AGE] {
            assert!(violations(&NewEmployee { age, ..valid() }).is_empty());
        }
        for age in [MIN_AGE - 1, MAX_AGE + 1] {
            let v = violations(&NewEmployee { age, ..valid() });
            assert_eq!(v.len(), 1);
            assert_eq!(v[0].field, "age");
        }
    }

    #[test]
    fn collects_every_violation() {
        let bad = NewEmployee {
            name: "  ".to_owned(),
            salary: 0,
            age: 12,
            title: String::new(),
        };
        let fields: Vec<_> = violations(&bad).into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "salary", "age", "title"]);
    }
}
