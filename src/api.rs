//! Backend Service Traits
//!
//! Seams between the row components and the backend. Components only see
//! these traits; the Tauri-bridge implementations below are what the app
//! wires in, tests use in-memory fakes.

use std::fmt;

use async_trait::async_trait;

use crate::commands;
use crate::models::EmbeddingChanges;

/// Errors coming back from backend calls
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The bridge call failed or the backend rejected it
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// Workspace management API
#[async_trait(?Send)]
pub trait WorkspaceApi: Send + Sync {
    /// Add/remove document-to-workspace embedding links
    async fn modify_embeddings(&self, slug: &str, changes: &EmbeddingChanges) -> ApiResult<()>;

    /// `Ok(false)` means the backend declined the change
    async fn set_pin_for_document(&self, slug: &str, doc_path: &str, pinned: bool) -> ApiResult<bool>;
}

/// Live sync feature surface
#[async_trait(?Send)]
pub trait LiveSyncApi: Send + Sync {
    /// `Ok(false)` means the backend declined the change
    async fn set_watch_status_for_document(&self, slug: &str, doc_path: &str, watched: bool) -> ApiResult<bool>;
}

/// Loading/refresh hooks owned by the directory that hosts the rows
#[async_trait(?Send)]
pub trait DirectoryControl {
    fn set_loading(&self, loading: bool);

    fn set_loading_message(&self, message: &str);

    /// Reload the listing; `force` bypasses any backend cache
    async fn refresh(&self, force: bool) -> ApiResult<()>;
}

// ========================
// Tauri bridge implementations
// ========================

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriWorkspaceApi;

#[async_trait(?Send)]
impl WorkspaceApi for TauriWorkspaceApi {
    async fn modify_embeddings(&self, slug: &str, changes: &EmbeddingChanges) -> ApiResult<()> {
        commands::update_workspace_embeddings(slug, changes)
            .await
            .map_err(ApiError::Rejected)
    }

    async fn set_pin_for_document(&self, slug: &str, doc_path: &str, pinned: bool) -> ApiResult<bool> {
        commands::update_document_pin(slug, doc_path, pinned)
            .await
            .map_err(ApiError::Rejected)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriLiveSyncApi;

#[async_trait(?Send)]
impl LiveSyncApi for TauriLiveSyncApi {
    async fn set_watch_status_for_document(&self, slug: &str, doc_path: &str, watched: bool) -> ApiResult<bool> {
        commands::update_document_watch_status(slug, doc_path, watched)
            .await
            .map_err(ApiError::Rejected)
    }
}
