use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use picker_core::DEFAULT_DEBOUNCE;
use picker_engine::{SearchSettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

pub const ENV_API_BASE: &str = "PICKER_API_BASE";
pub const ENV_DEBOUNCE_MS: &str = "PICKER_DEBOUNCE_MS";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "PICKER_REQUEST_TIMEOUT_MS";
pub const ENV_LOG: &str = "PICKER_LOG";
pub const ENV_LOG_PATH: &str = "PICKER_LOG_PATH";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchSettings,
    pub debounce: Duration,
    pub log_destination: LogDestination,
    pub log_path: PathBuf,
    /// Problems found while loading; logged once the logger is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();
        let defaults = SearchSettings::default();

        let base_url = lookup(ENV_API_BASE)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let debounce_ms = try_load(
            &lookup,
            &mut warnings,
            ENV_DEBOUNCE_MS,
            DEFAULT_DEBOUNCE.as_millis() as u64,
        );
        let timeout_ms = try_load(
            &lookup,
            &mut warnings,
            ENV_REQUEST_TIMEOUT_MS,
            defaults.request_timeout.as_millis() as u64,
        );
        let log_destination = try_load(&lookup, &mut warnings, ENV_LOG, LogDestination::File);
        let log_path = lookup(ENV_LOG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("picker.log"));

        Self {
            search: SearchSettings {
                base_url,
                request_timeout: Duration::from_millis(timeout_ms),
                ..defaults
            },
            debounce: Duration::from_millis(debounce_ms),
            log_destination,
            log_path,
            warnings,
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
    key: &str,
    default: T,
) -> T
where
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            warnings.push(format!("Invalid {key} value {raw:?}: {err}; using default"));
            default
        }
    }
}
