//! Pure queries over a full employee listing.

use std::cmp::Reverse;

use employees_sdk::Employee;

/// Number of names returned by [`top_names_by_salary`].
pub const TOP_EARNERS: usize = 10;

/// Employees whose name contains `query`, ignoring case, in listing order.
///
/// An empty query keeps everyone, including unnamed employees.
#[must_use]
pub fn search_by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    if query.is_empty() {
        return employees.to_vec();
    }
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|e| {
            e.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Largest defined salary, `0` when no employee has one.
#[must_use]
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees.iter().filter_map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `TOP_EARNERS` best-paid employees, highest salary first.
///
/// Employees without a salary rank after everyone else. Unnamed employees
/// take a slot but contribute no name.
#[must_use]
pub fn top_names_by_salary(employees: &[Employee]) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    // None < Some in Option ordering, so Reverse puts undefined salaries last
    ranked.sort_by_key(|e| Reverse(e.salary));
    ranked
        .into_iter()
        .take(TOP_EARNERS)
        .filter_map(|e| e.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, name: Option<&str>, salary: Option<i64>) -> Employee {
        Employee {
            id: id.to_owned(),
            name: name.map(str::to_owned),
            salary,
            ..Employee::default()
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            emp("1", Some("Alice Smith"), Some(5000)),
            emp("2", Some("Bob Jones"), Some(8000)),
            emp("3", None, Some(9000)),
            emp("4", Some("alicia keys"), None),
        ]
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let found = search_by_name(&sample(), "ALIC");
        let ids: Vec<_> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn search_result_is_subset_matching_query() {
        let all = sample();
        let found = search_by_name(&all, "o");
        assert!(found.iter().all(|e| all.contains(e)));
        assert!(found.iter().all(|e| {
            e.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains('o'))
        }));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn empty_query_returns_everyone() {
        assert_eq!(search_by_name(&sample(), ""), sample());
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(search_by_name(&sample(), "zelda").is_empty());
    }

    #[test]
    fn highest_salary_of_empty_list_is_zero() {
        assert_eq!(highest_salary(&[]), 0);
        assert_eq!(highest_salary(&[emp("1", Some("Nobody"), None)]), 0);
    }

    #[test]
    fn highest_salary_picks_maximum() {
        let employees = vec![emp("1", Some("A"), Some(5000)), emp("2", Some("B"), Some(8000))];
        assert_eq!(highest_salary(&employees), 8000);
    }

    #[test]
    fn top_ten_orders_by_salary_descending() {
        let employees = vec![emp("1", Some("Alice"), Some(5000)), emp("2", Some("Bob"), Some(8000))];
        assert_eq!(top_names_by_salary(&employees), vec!["Bob", "Alice"]);
    }

    #[test]
    fn top_ten_returns_exactly_ten_of_many() {
        let employees: Vec<_> = (1..=15)
            .map(|i| emp(&i.to_string(), Some(format!("E{i}").as_str()), Some(i * 1000)))
            .collect();

        let names = top_names_by_salary(&employees);

        assert_eq!(names.len(), 10);
        assert_eq!(names.first().map(String::as_str), Some("E15"));
        assert_eq!(names.last().map(String::as_str), Some("E6"));
    }

    #[test]
    fn top_ten_puts_undefined_salary_last_and_skips_unnamed() {
        let names = top_names_by_salary(&sample());
        assert_eq!(names, vec!["Bob Jones", "Alice Smith", "alicia keys"]);
    }
}
