//! Live Sync Commands
//!
//! Bindings for the experimental live document sync feature.

use serde::Serialize;
use super::{invoke, js_error_to_string};

#[derive(Serialize)]
struct UpdateWatchStatusArgs<'a> {
    slug: &'a str,
    #[serde(rename = "docPath")]
    doc_path: &'a str,
    #[serde(rename = "watchStatus")]
    watch_status: bool,
}

/// Returns whether the backend applied the change
pub async fn update_document_watch_status(slug: &str, doc_path: &str, watch_status: bool) -> Result<bool, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateWatchStatusArgs { slug, doc_path, watch_status })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_document_watch_status", js_args).await.map_err(js_error_to_string)?;
    Ok(result.is_truthy())
}
