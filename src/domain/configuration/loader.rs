//! Configuration loading from `.env`, environment variables and TOML files.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::app_config::{
    AppConfig, FileConfig, default_max_tokens, default_num_results, default_temperature,
    default_top_p, normalize_base_url,
};
use crate::domain::AppError;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_TEMPERATURE: &str = "AI_TEMPERATURE";
pub const ENV_TOP_P: &str = "AI_TOP_P";
pub const ENV_MAX_TOKENS: &str = "AI_MAX_TOKENS";
pub const ENV_NUM_RESULTS: &str = "AI_NUM_RESULTS";
pub const ENV_TIMEOUT_SECS: &str = "AI_TIMEOUT_SECS";

/// Load `.env` from the working directory into the process environment.
///
/// A missing or unreadable file is not an error; variables are then taken from
/// the environment directly.
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        log::info!("Error loading .env file: {}. Using environment variables directly.", err);
    }
}

/// Load configuration from an optional TOML file and the process environment.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    let file = match config_path {
        Some(path) => load_config_file(path)?,
        None => FileConfig::default(),
    };
    resolve_config(file, |key| std::env::var(key).ok())
}

/// Read and parse a TOML configuration file.
pub fn load_config_file(path: &Path) -> Result<FileConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<FileConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Merge file settings with variables from `lookup`, apply defaults and validate.
pub fn resolve_config<F>(file: FileConfig, lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let api_key = lookup(ENV_API_KEY)
        .or(file.api_key)
        .ok_or_else(|| missing_variable(ENV_API_KEY))?;
    let base_url = lookup(ENV_BASE_URL)
        .or(file.base_url)
        .ok_or_else(|| missing_variable(ENV_BASE_URL))?;

    let config = AppConfig {
        api_key,
        base_url: normalize_base_url(&base_url),
        temperature: parse_var(&lookup, ENV_TEMPERATURE)?
            .or(file.temperature)
            .unwrap_or_else(default_temperature),
        top_p: parse_var(&lookup, ENV_TOP_P)?.or(file.top_p).unwrap_or_else(default_top_p),
        max_tokens: parse_var(&lookup, ENV_MAX_TOKENS)?
            .or(file.max_tokens)
            .unwrap_or_else(default_max_tokens),
        num_results: parse_var(&lookup, ENV_NUM_RESULTS)?
            .or(file.num_results)
            .unwrap_or_else(default_num_results),
        timeout_secs: parse_var(&lookup, ENV_TIMEOUT_SECS)?.or(file.timeout_secs),
    };
    config.validate()?;
    Ok(config)
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::config_error(format!("Invalid value '{}' for {}: {}", raw, key, e))
            })
        })
        .transpose()
}

fn missing_variable(key: &str) -> AppError {
    AppError::config_error(format!("Failed to load environment variables: {} is required", key))
}
