//! Workspace Documents App
//!
//! Wires the backend services into context and shows the configured
//! workspace's document directory.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::LocalFileServer;
use crate::api::{TauriLiveSyncApi, TauriWorkspaceApi};
use crate::commands;
use crate::components::{DocumentEventAlerts, ToastHost, WorkspaceDirectory};
use crate::config::AppConfig;
use crate::context::RowServices;
use crate::events::{forward_to_window, EventBus};
use crate::models::{DocumentItem, WorkspaceRef};
use crate::toast::ToastStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let toasts = ToastStore::new(config.toast_duration_ms);
    let events = EventBus::new();
    forward_to_window(&events).detach();

    provide_context(RowServices {
        workspace_api: Arc::new(TauriWorkspaceApi),
        live_sync: Arc::new(TauriLiveSyncApi),
        storage_urls: Arc::new(LocalFileServer::new(config.file_server_url.clone())),
        notifier: Arc::new(toasts),
        events,
    });
    provide_context(toasts);
    provide_context(config.clone());

    let (workspace, set_workspace) = signal(None::<WorkspaceRef>);
    // No batch-move flow in this shell: nothing is ever pending or moved
    let has_changes = Signal::stored(false);
    let moved_items = Signal::stored(Vec::<DocumentItem>::new());

    // Load workspace on mount
    let slug = config.workspace_slug.clone();
    Effect::new(move |_| {
        let slug = slug.clone();
        spawn_local(async move {
            match commands::get_workspace(&slug).await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded workspace {} ({})", loaded.name, loaded.id);
                    set_workspace.set(Some(loaded));
                }
                Err(e) => log::error!("[APP] Failed to load workspace {}: {}", slug, e),
            }
        });
    });

    view! {
        <div class="app-layout">
            <ToastHost />
            <DocumentEventAlerts />
            <main class="main-content">
                {move || match workspace.get() {
                    Some(ws) => view! {
                        <h1>{ws.name.clone()}</h1>
                        <WorkspaceDirectory
                            workspace=ws
                            has_changes=has_changes
                            moved_items=moved_items
                        />
                    }
                    .into_any(),
                    None => view! { <p class="loading">"Loading workspace..."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}
