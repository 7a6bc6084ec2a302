//! Workspace File Row Component
//!
//! One document in the workspace directory: title with a metadata tooltip
//! and the action cluster (watch, download, pin, remove). The cluster is
//! hidden while the directory has uncommitted changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::remove_document;
use crate::components::flag_toggle::watch_toggle_visible;
use crate::components::{
    ActionPlaceholder, DirectoryHandle, DownloadButton, PinToggle, RemoveButton, WatchToggle,
};
use crate::config::AppConfig;
use crate::context::use_row_services;
use crate::format::{file_extension, format_date, middle_truncate};
use crate::models::{DocTarget, DocumentItem, WorkspaceRef};

/// Static text shown for a row
#[derive(Debug, Clone, PartialEq)]
pub struct RowPresentation {
    pub display_title: String,
    pub tooltip: String,
}

impl RowPresentation {
    pub fn new(item: &DocumentItem, title_max_chars: usize) -> Self {
        Self {
            display_title: middle_truncate(&item.title, title_max_chars),
            tooltip: format!(
                "{}\nDate: {}\nType: {}",
                item.title,
                format_date(item.published.as_deref()),
                file_extension(&item.url).to_uppercase()
            ),
        }
    }
}

/// What fills each action slot of a row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Watch,
    Download,
    Pin,
    Remove,
    Placeholder,
}

/// Pending batch edits freeze per-item actions; the watch slot keeps its
/// width for items that cannot be watched
pub fn row_actions(item: &DocumentItem, has_changes: bool) -> Vec<RowAction> {
    if has_changes {
        return vec![RowAction::Placeholder];
    }
    let watch = if watch_toggle_visible(item) {
        RowAction::Watch
    } else {
        RowAction::Placeholder
    };
    vec![watch, RowAction::Download, RowAction::Pin, RowAction::Remove]
}

#[component]
pub fn WorkspaceFileRow(
    item: DocumentItem,
    folder_name: String,
    workspace: WorkspaceRef,
    directory: DirectoryHandle,
    #[prop(into)] has_changes: Signal<bool>,
    #[prop(into)] moved_items: Signal<Vec<DocumentItem>>,
) -> impl IntoView {
    let services = use_row_services();
    let max_chars = use_context::<AppConfig>()
        .unwrap_or_default()
        .title_max_chars;
    let row = RowPresentation::new(&item, max_chars);
    let target = DocTarget::new(&workspace, &folder_name, &item);

    let moved_check = item.clone();
    let row_class = move || {
        if moved_items.with(|moved| moved_check.is_moved(moved)) {
            "file-row moved"
        } else {
            "file-row"
        }
    };

    let on_remove = {
        let target = target.clone();
        Callback::new(move |_: ()| {
            let services = services.clone();
            let target = target.clone();
            let directory = directory.clone();
            spawn_local(async move {
                remove_document(
                    &target,
                    services.workspace_api.as_ref(),
                    &directory,
                    services.notifier.as_ref(),
                )
                .await;
            });
        })
    };

    let doc_path = target.doc_path;

    let actions = move || {
        row_actions(&item, has_changes.get())
            .into_iter()
            .map(|action| match action {
                RowAction::Watch => view! {
                    <WatchToggle
                        workspace=workspace.clone()
                        doc_path=doc_path.clone()
                        item=Some(item.clone())
                    />
                }
                .into_any(),
                RowAction::Download => view! { <DownloadButton item=item.clone() /> }.into_any(),
                RowAction::Pin => view! {
                    <PinToggle
                        workspace=workspace.clone()
                        doc_path=doc_path.clone()
                        item=Some(item.clone())
                    />
                }
                .into_any(),
                RowAction::Remove => view! { <RemoveButton on_click=on_remove /> }.into_any(),
                RowAction::Placeholder => view! { <ActionPlaceholder /> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class=row_class>
            <div class="file-row-meta" title=row.tooltip>
                <span class="file-icon">"📄"</span>
                <p class="file-title">{row.display_title}</p>
            </div>
            <div class="file-row-actions">{actions}</div>
        </div>
    }
}
