//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_core::lifecycle::TransitionPolicy;
use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub policy: TransitionPolicy,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parsed(&var, "DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parsed(&var, "DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        let strict = flag(&var, "LIFECYCLE_STRICT_TRANSITIONS").unwrap_or(false);
        let seed_demo_data =
            flag(&var, "SEED_DEMO_DATA").unwrap_or_else(|| database.is_none());

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&var, "PORT").unwrap_or(8080),
            database,
            policy: if strict {
                TransitionPolicy::Strict
            } else {
                TransitionPolicy::Permissive
            },
            seed_demo_data,
        }
    }
}

fn parsed<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|s| s.parse().ok())
}

fn flag(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    var(key).map(|v| {
        let v = v.to_lowercase();
        v != "false" && v != "0" && !v.is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.policy, TransitionPolicy::Permissive);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_database_pool_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/quill"),
            ("DB_MAX_CONNECTIONS", "50"),
        ]);
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/quill");
        assert_eq!(database.max_connections, 50);
        assert_eq!(database.min_connections, 2);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_strict_policy_and_explicit_seed() {
        let config = config_from(&[
            ("LIFECYCLE_STRICT_TRANSITIONS", "true"),
            ("SEED_DEMO_DATA", "0"),
            ("PORT", "not-a-port"),
        ]);
        assert_eq!(config.policy, TransitionPolicy::Strict);
        assert!(!config.seed_demo_data);
        assert_eq!(config.port, 8080);
    }

    #[rstest]
    #[case("true", TransitionPolicy::Strict)]
    #[case("1", TransitionPolicy::Strict)]
    #[case("false", TransitionPolicy::Permissive)]
    #[case("FALSE", TransitionPolicy::Permissive)]
    #[case("0", TransitionPolicy::Permissive)]
    fn test_strict_flag_values(#[case] value: &str, #[case] expected: TransitionPolicy) {
        let config = config_from(&[("LIFECYCLE_STRICT_TRANSITIONS", value)]);
        assert_eq!(config.policy, expected);
    }
}
