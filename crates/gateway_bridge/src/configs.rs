//! Settings of the bridge.

use std::{collections::HashMap, path::PathBuf};

use common_utils::errors::CustomResult;
use error_stack::ResultExt;
use router_env::{config::Log, env::Env};
use serde::Deserialize;

use crate::factory::GatewayConfig;

/// Prefix of environment variables overriding the settings.
pub const ENV_PREFIX: &str = "BRIDGE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to build the configuration")]
    BuildFailed,
    #[error("Failed to deserialize the configuration")]
    DeserializationFailed,
    #[error("Gateway {name} is not configured")]
    GatewayNotConfigured { name: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: Log,
    /// Gateways by name.
    pub gateways: HashMap<String, GatewayConfig>,
}

impl Settings {
    /// Settings of the current environment.
    pub fn new() -> CustomResult<Self, ConfigurationError> {
        Self::with_config_path(None)
    }

    pub fn with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> CustomResult<Self, ConfigurationError> {
        let environment = router_env::which();
        let config_path = Self::config_path(environment, explicit_config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(config_path.clone()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()
            .change_context(ConfigurationError::BuildFailed)
            .attach_printable_lazy(|| format!("config file: {}", config_path.display()))?;

        config
            .try_deserialize()
            .change_context(ConfigurationError::DeserializationFailed)
    }

    /// Explicit path if given, `config/<env>.toml` under the workspace root otherwise.
    pub fn config_path(environment: Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| {
            let mut config_path = workspace_path();
            config_path.push("config");
            config_path.push(environment.config_file_name());
            config_path.set_extension("toml");
            config_path
        })
    }

    pub fn gateway(&self, name: &str) -> CustomResult<&GatewayConfig, ConfigurationError> {
        self.gateways.get(name).ok_or_else(|| {
            error_stack::report!(ConfigurationError::GatewayNotConfigured {
                name: name.to_string()
            })
        })
    }
}

fn workspace_path() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => {
            let mut path = PathBuf::from(manifest_dir);
            path.pop();
            path.pop();
            path
        }
        Err(_) => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_path_points_to_environment_file() {
        let path = Settings::config_path(Env::Sandbox, None);

        assert!(path.ends_with("config/sandbox.toml"));
    }

    #[test]
    fn explicit_path_wins() {
        let path = Settings::config_path(Env::Production, Some(PathBuf::from("/etc/bridge.toml")));

        assert_eq!(path, PathBuf::from("/etc/bridge.toml"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings =
            Settings::with_config_path(Some(PathBuf::from("/nonexistent/bridge.toml"))).unwrap();

        assert!(settings.log.console.enabled);
        assert!(settings.gateway("dummy").is_err());
    }
}
