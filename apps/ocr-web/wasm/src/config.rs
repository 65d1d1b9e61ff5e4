//! Static page configuration.
//!
//! Mirrors what used to live in `config.js`: base URL, upload limits, and
//! the error banner auto-hide delay. None of these are runtime flags.

use ocr_types::UploadLimits;
use wasm_bindgen::prelude::*;

/// Default backend for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// How long the error banner stays up before hiding itself.
pub const AUTO_HIDE_ERROR_MS: i32 = 10_000;

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AppConfig {
    api_base_url: String,
    limits: UploadLimits,
    auto_hide_error_ms: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            limits: UploadLimits::default(),
            auto_hide_error_ms: AUTO_HIDE_ERROR_MS,
        }
    }
}

#[wasm_bindgen]
impl AppConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config pointed at a different backend.
    #[wasm_bindgen(js_name = withBaseUrl)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    #[wasm_bindgen(getter, js_name = apiBaseUrl)]
    pub fn api_base_url_js(&self) -> String {
        self.api_base_url.clone()
    }
}

impl AppConfig {
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    pub fn auto_hide_error_ms(&self) -> i32 {
        self.auto_hide_error_ms
    }
}
