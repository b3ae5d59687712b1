use rx_config::RxConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &RxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() {
        if has_env_prefix(&env_keys, "RXCHECK_AUTH") {
            warnings.push(
                "Auth config appears default while RXCHECK_AUTH* env vars exist. Use double underscores (example: RXCHECK_AUTH__USER_EMAILS)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No login credentials configured. Set USER_EMAILS and USER_PASSWORDS (comma-separated, paired by position)."
                    .to_string(),
            );
        }
    }

    if config.server.bind == rx_config::ServerConfig::default().bind
        && has_env_prefix(&env_keys, "RXCHECK_SERVER_")
        && !has_env_prefix(&env_keys, "RXCHECK_SERVER__")
    {
        warnings.push(
            "Server config appears default while RXCHECK_SERVER* env vars exist. Use double underscores (example: RXCHECK_SERVER__BIND)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
