//! Resolution of the marketplace API base URL. The compiled-in value comes
//! from build environment variables; a `window.ADMATCH_CONFIG` global set by
//! the hosting page wins over it, so a statically served bundle can be
//! pointed at another backend without rebuilding. Nothing here is secret.

/// API base used when neither the build environment nor the hosting page
/// says otherwise. Matches the backend's local development port.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Frontend configuration. Currently a single knob, the API base URL.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolves the configuration: page-level override first, then the
    /// build-time variables, then the local default.
    pub fn load() -> Self {
        let api_base_url = page_override("api_base_url")
            .or_else(|| {
                option_env!("ADMATCH_API_BASE_URL")
                    .or(option_env!("ADMATCH_API_HOST"))
                    .and_then(non_blank)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}

/// Reads a string property from `window.ADMATCH_CONFIG`, when the hosting
/// page defined that object at all.
#[cfg(target_arch = "wasm32")]
fn page_override(key: &str) -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ADMATCH_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str(key))
        .ok()?
        .as_string()?;
    non_blank(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_override(_key: &str) -> Option<String> {
    None
}

/// Trimmed value, or `None` once only whitespace is left.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_API_BASE_URL, non_blank};

    #[test]
    fn blank_override_values_are_discarded() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank(" \t "), None);
        assert_eq!(
            non_blank(" https://api.admatchhub.io/api/v1 ").as_deref(),
            Some("https://api.admatchhub.io/api/v1")
        );
    }

    #[test]
    fn load_always_yields_a_base_url() {
        // Off-browser there is no page override, so the build variables or
        // the default must fill the base in.
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn default_base_targets_the_versioned_api() {
        assert!(DEFAULT_API_BASE_URL.ends_with("/api/v1"));
    }
}
