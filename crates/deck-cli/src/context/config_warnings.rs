use deck_config::DeckConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeckConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeckConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.backend.is_configured() && has_env_prefix(&keys, "TASKDECK_BACKEND") {
        warnings.push(
            "Backend config appears default while TASKDECK_BACKEND* env vars exist. Use double underscores (example: TASKDECK_BACKEND__URL)."
                .to_string(),
        );
    }

    for key in keys.iter().filter(|key| is_single_underscore_key(key, "TASKDECK_GENERAL_")) {
        warnings.push(format!(
            "{key} is ignored. Use double underscores (example: TASKDECK_GENERAL__DEFAULT_SORT)."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn is_single_underscore_key(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('_'))
}
