//! Workspace Directory Component
//!
//! Folder listing of a workspace's documents, with the loading overlay the
//! rows drive while they mutate the workspace.

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, ApiResult, DirectoryControl};
use crate::commands;
use crate::components::WorkspaceFileRow;
use crate::models::{DocumentFolder, DocumentItem, WorkspaceRef};

/// Listing state shared with the rows
#[derive(Clone)]
pub struct DirectoryHandle {
    slug: String,
    pub folders: RwSignal<Vec<DocumentFolder>>,
    pub loading: RwSignal<bool>,
    pub loading_message: RwSignal<String>,
}

impl DirectoryHandle {
    pub fn new(slug: String) -> Self {
        Self {
            slug,
            folders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            loading_message: RwSignal::new(String::new()),
        }
    }
}

#[async_trait(?Send)]
impl DirectoryControl for DirectoryHandle {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_loading_message(&self, message: &str) {
        self.loading_message.set(message.to_string());
    }

    async fn refresh(&self, force: bool) -> ApiResult<()> {
        let folders = commands::list_workspace_documents(&self.slug, force)
            .await
            .map_err(ApiError::Rejected)?;
        log::debug!("[Directory] Loaded {} folder(s) for {}", folders.len(), self.slug);
        self.folders.set(folders);
        Ok(())
    }
}

#[component]
pub fn WorkspaceDirectory(
    workspace: WorkspaceRef,
    #[prop(into)] has_changes: Signal<bool>,
    #[prop(into)] moved_items: Signal<Vec<DocumentItem>>,
) -> impl IntoView {
    let directory = DirectoryHandle::new(workspace.slug.clone());
    let folders = directory.folders;
    let loading = directory.loading;
    let loading_message = directory.loading_message;

    // Initial load
    let initial = directory.clone();
    Effect::new(move |_| {
        let directory = initial.clone();
        spawn_local(async move {
            directory.set_loading(true);
            if let Err(e) = directory.refresh(false).await {
                log::error!("[Directory] Error loading {}: {}", directory.slug, e);
            }
            directory.set_loading(false);
        });
    });

    let folder_views = move || {
        folders
            .get()
            .into_iter()
            .map(|folder| {
                let rows = folder
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <WorkspaceFileRow
                                item=item
                                folder_name=folder.name.clone()
                                workspace=workspace.clone()
                                directory=directory.clone()
                                has_changes=has_changes
                                moved_items=moved_items
                            />
                        }
                    })
                    .collect_view();
                view! {
                    <div class="directory-folder">
                        <div class="folder-header">
                            <span class="folder-icon">"📁"</span>
                            <span class="folder-name">{folder.name.clone()}</span>
                        </div>
                        {rows}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="workspace-directory">
            <Show when=move || loading.get()>
                <div class="directory-loading">
                    <div class="spinner"></div>
                    <p>{move || loading_message.get()}</p>
                </div>
            </Show>
            <Show when=move || !loading.get() && folders.with(|f| f.is_empty())>
                <p class="directory-empty">"No documents in this workspace"</p>
            </Show>
            {folder_views}
        </div>
    }
}
