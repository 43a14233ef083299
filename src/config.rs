/// Runtime configuration passed in from the hosting page
use crate::error::AppError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the scraping backend, without the `/scrape` path
    pub backend_url: String,
}

impl AppConfig {
    /// Decode the optional config object given to `start_app`.
    /// `undefined` and `null` fall back to the defaults.
    pub fn from_js(value: JsValue) -> Result<AppConfig, AppError> {
        if value.is_null() || value.is_undefined() {
            return Ok(AppConfig::default());
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| AppError::Config(format!("{:?}", e)))
    }

    pub fn scrape_endpoint(&self) -> String {
        format!("{}/scrape", self.backend_url.trim_end_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
