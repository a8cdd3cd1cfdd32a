use crate::app_config::{AppConfig, Environment, DEFAULT_SHEET_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("LUXWATCH_ENV", "development"))?;

    let bind_addr = parse_addr("LUXWATCH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LUXWATCH_LOG_LEVEL", "info");
    let sheet_url = or_default("LUXWATCH_SHEET_URL", DEFAULT_SHEET_URL);
    if sheet_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUXWATCH_SHEET_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("LUXWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LUXWATCH_USER_AGENT", DEFAULT_USER_AGENT);

    let refresh_interval_secs = parse_u64("LUXWATCH_REFRESH_INTERVAL_SECS", "300")?;
    if refresh_interval_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUXWATCH_REFRESH_INTERVAL_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let data_dir = PathBuf::from(or_default("LUXWATCH_DATA_DIR", "./.luxwatch"));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheet_url,
        request_timeout_secs,
        user_agent,
        refresh_interval_secs,
        data_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LUXWATCH_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
