//! # rx-config
//!
//! Layered configuration loading for rxcheck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RXCHECK_*` prefix, `__` as separator)
//! 2. Credential variables `USER_EMAILS` / `USER_PASSWORDS`, overridden by
//!    `RXCHECK_AUTH__USER_EMAILS` / `RXCHECK_AUTH__USER_PASSWORDS`
//! 3. Project-level `.rxcheck/config.toml`
//! 4. User-level `~/.config/rxcheck/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RXCHECK_SERVER__BIND` -> `server.bind`,
//! `RXCHECK_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc. The
//! credential variables are the exception: they are copied into the `auth`
//! section as raw strings so passwords such as `0123` survive intact.
//!
//! # Usage
//!
//! ```no_run
//! use rx_config::RxConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = RxConfig::load_with_dotenv().expect("config");
//!
//! if config.auth.is_configured() {
//!     println!("serving on {}", config.server.bind);
//! }
//! ```

mod auth;
mod error;
mod general;
mod server;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Credential variables and the `auth` keys they fill, lowest priority first.
///
/// These are read verbatim: figment's env provider would parse `0123` as a
/// number and lose the leading zero.
const CREDENTIAL_VARS: [(&str, &str); 4] = [
    ("USER_EMAILS", "auth.user_emails"),
    ("USER_PASSWORDS", "auth.user_passwords"),
    ("RXCHECK_AUTH__USER_EMAILS", "auth.user_emails"),
    ("RXCHECK_AUTH__USER_PASSWORDS", "auth.user_passwords"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RxConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if any) before building the
    /// figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration after reading a specific dotenv file.
    ///
    /// Values already present in the process environment are not overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the file cannot be read, or any
    /// error from [`Self::load`].
    pub fn load_with_env_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(|error| ConfigError::InvalidValue {
            field: "env_file".into(),
            reason: format!("{}: {error}", path.display()),
        })?;
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".rxcheck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Credential variables, unparsed
        for (var, key) in CREDENTIAL_VARS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        // Layer 4: Prefixed environment variables (highest priority)
        figment = figment.merge(
            Env::prefixed("RXCHECK_")
                .filter(|key| !key.as_str().to_ascii_uppercase().starts_with("AUTH__"))
                .split("__"),
        );

        figment
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.server.socket_addr()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rxcheck").join("config.toml"))
    }
}
