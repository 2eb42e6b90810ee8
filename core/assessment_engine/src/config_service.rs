use std::env;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use platform::{PlatformError, PlatformResult};
use shared_types::{AppConfig, ProviderConfig};

use crate::norms::{is_usable_norm, NormTable};
use crate::personality::ScoreTransformer;

const PLACEHOLDER_PATTERN: &str = r"\{\{([a-zA-Z0-9_]+)\}\}";

/// Load `.env` from the working directory if one exists.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load environment file"),
    }
}

/// Replace every `{{VAR}}` with the value of `VAR`. Unset variables keep
/// their placeholder so the gap stays visible downstream.
pub fn substitute_env_placeholders(content: &str) -> PlatformResult<String> {
    let re = Regex::new(PLACEHOLDER_PATTERN)
        .map_err(|e| PlatformError::Config(format!("invalid placeholder pattern: {}", e)))?;

    let processed = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        env::var(var_name).unwrap_or_else(|_| {
            warn!(var_name, "config placeholder has no matching environment variable");
            format!("{{{{{}}}}}", var_name)
        })
    });
    Ok(processed.into_owned())
}

/// Parse and validate; an unusable norm override is a `Config` error.
pub fn parse_config(content: &str, source_name: &str) -> PlatformResult<AppConfig> {
    let processed = substitute_env_placeholders(content)?;
    let config: AppConfig =
        toml::from_str(&processed).map_err(|e| PlatformError::parse(source_name, e))?;
    norm_table_from_config(&config)?;
    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> PlatformResult<AppConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, &path.display().to_string())?;
    info!(
        path = %path.display(),
        provider = %config.llm.default_provider,
        norm_overrides = config.norms.as_ref().map_or(0, |n| n.len()),
        "configuration loaded"
    );
    Ok(config)
}

/// True for values that are empty or still hold an unresolved `{{VAR}}`.
pub fn is_unresolved_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value.contains("{{")
}

/// The provider's API key, if it is actually usable.
pub fn resolved_api_key(provider: &ProviderConfig) -> Option<&str> {
    provider
        .api_key
        .as_deref()
        .filter(|key| !is_unresolved_placeholder(key))
}

/// The configured norm overrides, each checked with [`is_usable_norm`].
/// Domains not listed keep the built-in norms once handed to
/// [`ScoreTransformer::new`].
pub fn norm_table_from_config(config: &AppConfig) -> PlatformResult<NormTable> {
    let overrides = config.norms.clone().unwrap_or_default();
    if let Some((domain, norm)) = overrides.iter().find(|(_, norm)| !is_usable_norm(norm)) {
        return Err(PlatformError::Config(format!(
            "norm override for {domain} needs a finite mean, a finite sd > 0 and n > 0 \
             (got mean {}, sd {}, n {})",
            norm.mean, norm.sd, norm.n
        )));
    }
    Ok(overrides)
}

pub fn transformer_from_config(config: &AppConfig) -> PlatformResult<ScoreTransformer> {
    Ok(ScoreTransformer::new(norm_table_from_config(config)?))
}
