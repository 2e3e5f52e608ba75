//!
//! Current environment related stuff.
//!

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Env variable that sets Development/Sandbox/Production env
pub const RUN_ENV: &str = "RUN_ENV";

///
/// Current environment.
///
#[derive(
    Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Env {
    /// Development environment.
    #[default]
    Development,
    /// Sandbox environment.
    Sandbox,
    /// Production environment.
    Production,
}

impl Env {
    /// Name of the config file, without extension, holding settings for this environment.
    pub fn config_file_name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

/// Name of current environment. Either "Development", "Sandbox" or "Production".
pub fn which() -> Env {
    #[cfg(debug_assertions)]
    let default_env = Env::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Env::Production;

    std::env::var(RUN_ENV).map_or_else(|_| default_env, |v| v.parse().unwrap_or(default_env))
}
