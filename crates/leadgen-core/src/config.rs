use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let google_api_key = require("GOOGLE_API_KEY")?;
    let log_level = or_default("LEADGEN_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("LEADGEN_HTTP_TIMEOUT_SECS", "8")?;
    let user_agent = or_default(
        "LEADGEN_USER_AGENT",
        "Mozilla/5.0 (compatible; LeadGenBot/1.0)",
    );
    let page_token_delay_ms = parse_u64("LEADGEN_PAGE_TOKEN_DELAY_MS", "2200")?;
    let detail_jitter_min_ms = parse_u64("LEADGEN_DETAIL_JITTER_MIN_MS", "100")?;
    let detail_jitter_max_ms = parse_u64("LEADGEN_DETAIL_JITTER_MAX_MS", "200")?;
    let max_pages_per_keyword = parse_usize("LEADGEN_MAX_PAGES_PER_KEYWORD", "10")?;

    if detail_jitter_max_ms < detail_jitter_min_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_DETAIL_JITTER_MAX_MS".to_string(),
            reason: format!(
                "must be >= LEADGEN_DETAIL_JITTER_MIN_MS ({detail_jitter_min_ms})"
            ),
        });
    }

    Ok(AppConfig {
        google_api_key,
        log_level,
        http_timeout_secs,
        user_agent,
        page_token_delay_ms,
        detail_jitter_min_ms,
        detail_jitter_max_ms,
        max_pages_per_keyword,
    })
}
