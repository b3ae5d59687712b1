use std::path::Path;

use anyhow::Context;
use rx_config::RxConfig;

/// Load configuration, reading `env_file` (or `./.env` when absent) first.
pub fn load_config(env_file: Option<&str>) -> anyhow::Result<RxConfig> {
    match env_file {
        Some(path) => RxConfig::load_with_env_file(Path::new(path))
            .with_context(|| format!("failed to load configuration with env file {path}")),
        None => RxConfig::load_with_dotenv().context("failed to load configuration"),
    }
}
