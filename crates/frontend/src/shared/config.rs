//! Client configuration and API environment selection.
//!
//! The configuration is embedded at build time (`config/default.toml`) and can
//! be adjusted with `NEARHEAR_*` environment variables when compiling. The API
//! environment can additionally be switched at runtime by the host page via
//! `window.__NEARHEAR_API_ENV__`.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Global the host page may set to pick an API environment.
const RUNTIME_ENV_MARKER: &str = "__NEARHEAR_API_ENV__";

pub const DEFAULT_POSTHOG_HOST: &str = "https://us.i.posthog.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid embedded configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    pub city: CityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Environment name, see [`ApiEnvironment::resolve`].
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub posthog_key: String,
    #[serde(default = "default_posthog_host")]
    pub posthog_host: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            posthog_key: String::new(),
            posthog_host: default_posthog_host(),
        }
    }
}

impl AnalyticsConfig {
    /// Configured key, `None` when analytics are disabled.
    pub fn key(&self) -> Option<&str> {
        let key = self.posthog_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

fn default_posthog_host() -> String {
    DEFAULT_POSTHOG_HOST.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CityConfig {
    /// City selected on first visit when it is in the supported list.
    pub preferred: String,
}

/// Values that replace parts of the embedded configuration.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_environment: Option<String>,
    pub posthog_key: Option<String>,
    pub posthog_host: Option<String>,
}

impl ConfigOverrides {
    /// Overrides captured from the build environment.
    pub fn from_build_env() -> Self {
        Self {
            api_environment: option_env!("NEARHEAR_API_ENV").map(str::to_string),
            posthog_key: option_env!("NEARHEAR_POSTHOG_KEY").map(str::to_string),
            posthog_host: option_env!("NEARHEAR_POSTHOG_HOST").map(str::to_string),
        }
    }
}

impl AppConfig {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(environment) = overrides.api_environment {
            self.api.environment = environment;
        }
        if let Some(key) = overrides.posthog_key {
            self.analytics.posthog_key = key;
        }
        if let Some(host) = overrides.posthog_host.filter(|h| !h.trim().is_empty()) {
            self.analytics.posthog_host = host;
        }
    }

    /// Picks the API environment. A runtime marker, when present, wins over
    /// the configured name.
    pub fn api_environment(&self, runtime_marker: Option<&str>) -> ApiEnvironment {
        ApiEnvironment::resolve(runtime_marker.or(Some(self.api.environment.as_str())))
    }
}

/// Load the embedded configuration with build-time overrides applied.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_overrides(ConfigOverrides::from_build_env());
    log::debug!("[config] api environment configured as '{}'", config.api.environment);
    Ok(config)
}

/// Deployment environments the client knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEnvironment {
    #[default]
    Prod,
    Local,
}

impl ApiEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnvironment::Prod => "prod",
            ApiEnvironment::Local => "local",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Prod => "https://nearhear.app",
            ApiEnvironment::Local => "http://localhost:1024",
        }
    }

    /// Unknown or missing names fall back to production.
    pub fn resolve(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            Some("local") => ApiEnvironment::Local,
            Some("prod") => ApiEnvironment::Prod,
            _ => ApiEnvironment::Prod,
        }
    }
}

/// Reads `window.__NEARHEAR_API_ENV__` if the host page set it to a string.
pub fn runtime_env_marker() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(RUNTIME_ENV_MARKER))
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.environment, "prod");
        assert_eq!(config.city.preferred, "Portland");
        assert_eq!(config.analytics.posthog_host, DEFAULT_POSTHOG_HOST);
        assert_eq!(config.analytics.key(), None);
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.apply_overrides(ConfigOverrides {
            api_environment: Some("local".to_string()),
            posthog_key: Some("phc_123".to_string()),
            posthog_host: Some("  ".to_string()),
        });
        assert_eq!(config.api.environment, "local");
        assert_eq!(config.analytics.key(), Some("phc_123"));
        assert_eq!(config.analytics.posthog_host, DEFAULT_POSTHOG_HOST);
    }

    #[test]
    fn test_environment_resolution() {
        assert_eq!(ApiEnvironment::resolve(Some("local")), ApiEnvironment::Local);
        assert_eq!(ApiEnvironment::resolve(Some("prod")), ApiEnvironment::Prod);
        assert_eq!(ApiEnvironment::resolve(Some("staging")), ApiEnvironment::Prod);
        assert_eq!(ApiEnvironment::resolve(Some("")), ApiEnvironment::Prod);
        assert_eq!(ApiEnvironment::resolve(None), ApiEnvironment::Prod);
        assert_eq!(ApiEnvironment::Local.base_url(), "http://localhost:1024");
    }

    #[test]
    fn test_runtime_marker_wins_over_config() {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.api.environment = "local".to_string();
        assert_eq!(config.api_environment(None), ApiEnvironment::Local);
        assert_eq!(config.api_environment(Some("prod")), ApiEnvironment::Prod);
        assert_eq!(config.api_environment(Some("bogus")), ApiEnvironment::Prod);
    }

    #[test]
    fn test_missing_analytics_section_uses_defaults() {
        let config: AppConfig =
            toml::from_str("[api]\nenvironment = \"prod\"\n[city]\npreferred = \"Seattle\"\n").unwrap();
        assert_eq!(config.analytics, AnalyticsConfig::default());
    }
}
