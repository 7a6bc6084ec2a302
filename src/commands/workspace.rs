//! Workspace Commands
//!
//! Frontend bindings for workspace document commands.

use serde::Serialize;
use crate::models::{DocumentFolder, EmbeddingChanges, WorkspaceRef};
use super::{invoke, js_error_to_string};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SlugArgs<'a> {
    slug: &'a str,
}

#[derive(Serialize)]
struct ListDocumentsArgs<'a> {
    slug: &'a str,
    refresh: bool,
}

#[derive(Serialize)]
struct UpdateEmbeddingsArgs<'a> {
    slug: &'a str,
    adds: &'a [String],
    deletes: &'a [String],
}

#[derive(Serialize)]
struct UpdatePinArgs<'a> {
    slug: &'a str,
    #[serde(rename = "docPath")]
    doc_path: &'a str,
    #[serde(rename = "pinStatus")]
    pin_status: bool,
}

// ========================
// Commands
// ========================

pub async fn get_workspace(slug: &str) -> Result<WorkspaceRef, String> {
    let js_args = serde_wasm_bindgen::to_value(&SlugArgs { slug }).map_err(|e| e.to_string())?;
    let result = invoke("get_workspace", js_args).await.map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_workspace_documents(slug: &str, refresh: bool) -> Result<Vec<DocumentFolder>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ListDocumentsArgs { slug, refresh }).map_err(|e| e.to_string())?;
    let result = invoke("list_workspace_documents", js_args).await.map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_workspace_embeddings(slug: &str, changes: &EmbeddingChanges) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateEmbeddingsArgs {
        slug,
        adds: &changes.adds,
        deletes: &changes.deletes,
    })
    .map_err(|e| e.to_string())?;
    invoke("update_workspace_embeddings", js_args).await.map_err(js_error_to_string)?;
    Ok(())
}

/// Returns whether the backend applied the change
pub async fn update_document_pin(slug: &str, doc_path: &str, pin_status: bool) -> Result<bool, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdatePinArgs { slug, doc_path, pin_status }).map_err(|e| e.to_string())?;
    let result = invoke("update_document_pin", js_args).await.map_err(js_error_to_string)?;
    Ok(result.is_truthy())
}
