//! Build-time configuration for the API endpoint and log level with an optional
//! runtime override. The runtime config is read from `window.MARKETSAFE_CONFIG`
//! (if present) so static deployments can point at another API without
//! rebuilding. Configuration values are public; do not store secrets here.

/// API base used when nothing is configured, matching the local backend.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("MARKETSAFE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let log_level = option_env!("MARKETSAFE_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Resolves an API path against the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }
}

/// Joins a base URL and a path without doubling or dropping the separator.
/// An empty base leaves the path relative to the current origin.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MARKETSAFE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, join_url, normalize_runtime_value,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:8000".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.marketsafe.dev "),
            Some("https://api.marketsafe.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8000/", "/accounts"),
            "http://localhost:8000/accounts"
        );
        assert_eq!(
            join_url("http://localhost:8000", "accounts/7"),
            "http://localhost:8000/accounts/7"
        );
        assert_eq!(join_url("  ", "/listings"), "/listings");
    }

    #[test]
    fn load_falls_back_to_local_backend_without_overrides() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.log_level.is_empty());
    }
}
