//! Runtime settings of the host, read from the environment.
//!
//! | variable                  | default     |
//! |---------------------------|-------------|
//! | `USER_ADMIN_HOST`         | `127.0.0.1` |
//! | `USER_ADMIN_PORT`         | `8080`      |
//! | `USER_ADMIN_OPEN_BROWSER` | `true`      |

use thiserror::Error;

pub const HOST_VAR: &str = "USER_ADMIN_HOST";
pub const PORT_VAR: &str = "USER_ADMIN_PORT";
pub const OPEN_BROWSER_VAR: &str = "USER_ADMIN_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = HostConfig::default();

        if let Some(host) = get(HOST_VAR) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: PORT_VAR,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = get(OPEN_BROWSER_VAR) {
            config.open_browser = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        name: OPEN_BROWSER_VAR,
                        value: flag,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = HostConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (OPEN_BROWSER_VAR, "off"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_values() {
        let err = HostConfig::from_lookup(lookup(&[(PORT_VAR, "80a")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));

        let err = HostConfig::from_lookup(lookup(&[(OPEN_BROWSER_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                name: OPEN_BROWSER_VAR,
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = HostConfig::from_lookup(lookup(&[(PORT_VAR, "  "), (HOST_VAR, "")])).unwrap();
        assert_eq!(config, HostConfig::default());
    }
}
