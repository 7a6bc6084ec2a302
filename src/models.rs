//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Document entry inside a workspace folder (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    pub id: String,
    pub name: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub published: Option<String>,
    /// Workspaces this document is pinned in
    #[serde(default)]
    pub pinned_workspaces: Vec<u32>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub can_watch: bool,
}

impl DocumentItem {
    pub fn is_pinned_in(&self, workspace_id: u32) -> bool {
        self.pinned_workspaces.contains(&workspace_id)
    }

    /// True if this item is part of a pending move
    pub fn is_moved(&self, moved_items: &[DocumentItem]) -> bool {
        moved_items.iter().any(|moved| moved.id == self.id)
    }
}

/// Folder grouping in the workspace file browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFolder {
    pub name: String,
    #[serde(default)]
    pub items: Vec<DocumentItem>,
}

/// Workspace identity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRef {
    pub id: u32,
    pub slug: String,
    pub name: String,
}

/// Embedding link changes for one workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingChanges {
    pub adds: Vec<String>,
    pub deletes: Vec<String>,
}

impl EmbeddingChanges {
    pub fn delete(doc_path: impl Into<String>) -> Self {
        Self {
            adds: Vec::new(),
            deletes: vec![doc_path.into()],
        }
    }
}

/// Document path as the backend knows it: `<folder>/<file name>`
pub fn doc_path(folder_name: &str, item_name: &str) -> String {
    format!("{}/{}", folder_name, item_name)
}

/// Workspace + document path pair every per-document call targets
#[derive(Debug, Clone, PartialEq)]
pub struct DocTarget {
    pub workspace_slug: String,
    pub doc_path: String,
}

impl DocTarget {
    pub fn new(workspace: &WorkspaceRef, folder_name: &str, item: &DocumentItem) -> Self {
        Self {
            workspace_slug: workspace.slug.clone(),
            doc_path: doc_path(folder_name, &item.name),
        }
    }
}
