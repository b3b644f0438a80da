//! Environment variable parsing helpers shared by pool configuration.

use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when it is
/// missing or malformed.
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse a required environment variable.
pub fn parse_env_required<T: FromStr>(key: &str) -> Result<T, String> {
    std::env::var(key)
        .map_err(|_| format!("{} environment variable not set", key))?
        .parse()
        .map_err(|_| format!("Failed to parse environment variable {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn parse_env_with_default_falls_back_on_missing_and_garbage() {
        std::env::remove_var("DB_POOL_TEST_VALUE");
        assert_eq!(parse_env_with_default("DB_POOL_TEST_VALUE", 42u32), 42);

        std::env::set_var("DB_POOL_TEST_VALUE", "not-a-number");
        assert_eq!(parse_env_with_default("DB_POOL_TEST_VALUE", 42u32), 42);

        std::env::set_var("DB_POOL_TEST_VALUE", "7");
        assert_eq!(parse_env_with_default("DB_POOL_TEST_VALUE", 42u32), 7);
        std::env::remove_var("DB_POOL_TEST_VALUE");
    }

    #[test]
    #[serial_test::serial]
    fn parse_env_required_reports_missing_key() {
        std::env::remove_var("DB_POOL_TEST_REQUIRED");
        let err = parse_env_required::<String>("DB_POOL_TEST_REQUIRED").unwrap_err();
        assert!(err.contains("DB_POOL_TEST_REQUIRED"));

        std::env::set_var("DB_POOL_TEST_REQUIRED", "postgres://localhost/posts");
        assert_eq!(
            parse_env_required::<String>("DB_POOL_TEST_REQUIRED").unwrap(),
            "postgres://localhost/posts"
        );
        std::env::remove_var("DB_POOL_TEST_REQUIRED");
    }
}
