//! Frontend Configuration
//!
//! Read once at startup from `window.__WORKSPACE_DOCS_CONFIG__`, injected by
//! the host page. Every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__WORKSPACE_DOCS_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace shown on startup
    pub workspace_slug: String,
    /// Base URL of the HTTP server exposing local documents
    pub file_server_url: String,
    pub toast_duration_ms: u32,
    pub title_max_chars: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace_slug: "default".to_string(),
            file_server_url: "http://localhost:8888/files".to_string(),
            toast_duration_ms: 5000,
            title_max_chars: 50,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the page global, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not installed yet
                web_sys::console::warn_1(&format!("[Config] Invalid {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
