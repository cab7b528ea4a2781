//! Tests for configuration parsing.

#[cfg(test)]
mod tests {
    use crate::config::EmployeesConfig;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = EmployeesConfig::default();
        assert_eq!(
            config.upstream.base_url,
            "http://localhost:8112/api/v1/employee"
        );
        assert_eq!(config.cache.ttl, Duration::from_secs(300));
        assert_eq!(config.cache.max_entries, 10_000);
        assert_eq!(config.cache.initial_capacity, 100);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_backoff, Duration::from_millis(200));
        assert!((config.retry.multiplier - 2.0).abs() < f64::EPSILON);
        assert!(!config.retry.jitter);
    }

    #[test]
    fn test_config_parse_durations_from_strings() {
        let yaml = r#"
upstream:
  base_url: "http://employees.internal/api/v1/employee"
  request_timeout: "3s"
cache:
  ttl: "90s"
  max_entries: 500
retry:
  max_attempts: 3
  initial_backoff: "50ms"
"#;
        let config: EmployeesConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            config.upstream.base_url,
            "http://employees.internal/api/v1/employee"
        );
        assert_eq!(config.upstream.request_timeout, Duration::from_secs(3));
        assert_eq!(config.cache.ttl, Duration::from_secs(90));
        assert_eq!(config.cache.max_entries, 500);
        assert_eq!(config.cache.initial_capacity, 100); // default
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.initial_backoff, Duration::from_millis(50));
        assert_eq!(config.retry.max_backoff, Duration::from_secs(10)); // default
    }

    #[test]
    fn test_config_reject_unknown_fields() {
        let yaml = r#"
cache:
  ttl: "1m"
  eviction: "lfu"
"#;
        let result: Result<EmployeesConfig, _> = serde_saphyr::from_str(yaml);
        assert!(
            result.is_err(),
            "Config should reject unknown fields due to deny_unknown_fields"
        );
    }

    #[test]
    fn test_config_reject_invalid_duration() {
        let yaml = r#"
retry:
  initial_backoff: "soon"
"#;
        let result: Result<EmployeesConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = EmployeesConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["cache"]["ttl"], "5m");
        assert_eq!(json["retry"]["initial_backoff"], "200ms");
        let back: EmployeesConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
