//! Configuration management for AddressBloc.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the AddressBloc console.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file imported before the menu starts (optional)
    pub import_file: Option<PathBuf>,

    /// Emit the ANSI clear-screen sequence between menu screens (default: true)
    pub clear_screen: bool,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BLOC_IMPORT_FILE`: CSV file to import at startup
    /// - `ADDRESS_BLOC_CLEAR_SCREEN`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let import_file = match env::var("ADDRESS_BLOC_IMPORT_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BLOC_IMPORT_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(_) => None,
        };

        let clear_screen = Self::parse_env_bool("ADDRESS_BLOC_CLEAR_SCREEN", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            import_file,
            clear_screen,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            import_file: None,
            clear_screen: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.import_file.is_none());
        assert!(config.clear_screen);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BLOC_IMPORT_FILE", "entries.csv");
        guard.set("ADDRESS_BLOC_CLEAR_SCREEN", "false");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.import_file, Some(PathBuf::from("entries.csv")));
        assert!(!config.clear_screen);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_import_file() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BLOC_IMPORT_FILE", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BLOC_IMPORT_FILE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_ON", "Yes");
        guard.set("TEST_BOOL_OFF", "0");

        assert!(Config::parse_env_bool("TEST_BOOL_ON", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_BOOL_OFF", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        let result = Config::parse_env_bool("TEST_BOOL_INVALID", true);
        assert!(result.is_err());
    }
}
