//! Pin / Watch Toggle Components
//!
//! Icon toggles mirroring a per-document backend flag. Clicks while a
//! request is in flight are ignored.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{request_toggle, ToggleKind, ToggleState};
use crate::components::ActionPlaceholder;
use crate::context::use_row_services;
use crate::models::{DocTarget, DocumentItem, WorkspaceRef};

/// Pin/unpin the document in the workspace
#[component]
pub fn PinToggle(
    workspace: WorkspaceRef,
    doc_path: String,
    item: Option<DocumentItem>,
) -> impl IntoView {
    let Some(item) = item else {
        return view! { <ActionPlaceholder /> }.into_any();
    };
    let target = DocTarget {
        workspace_slug: workspace.slug.clone(),
        doc_path,
    };

    view! {
        <FlagToggle
            kind=ToggleKind::Pin
            initial=item.is_pinned_in(workspace.id)
            target=target
            icon="📌"
        />
    }
    .into_any()
}

/// Watch/unwatch the document for source changes; only for watchable items
#[component]
pub fn WatchToggle(
    workspace: WorkspaceRef,
    doc_path: String,
    item: Option<DocumentItem>,
) -> impl IntoView {
    let item = match item {
        Some(item) if watch_toggle_visible(&item) => item,
        _ => return view! { <ActionPlaceholder /> }.into_any(),
    };
    let target = DocTarget {
        workspace_slug: workspace.slug.clone(),
        doc_path,
    };

    view! {
        <FlagToggle
            kind=ToggleKind::Watch
            initial=item.watched
            target=target
            icon="👁"
        />
    }
    .into_any()
}

pub fn watch_toggle_visible(item: &DocumentItem) -> bool {
    item.can_watch
}

#[component]
fn FlagToggle(
    kind: ToggleKind,
    initial: bool,
    target: DocTarget,
    icon: &'static str,
) -> impl IntoView {
    let services = use_row_services();
    let state = RwSignal::new(ToggleState::new(initial));
    let (hover, set_hover) = signal(false);

    let on_click = move |_| {
        let mut desired = None;
        state.update(|s| desired = s.begin());
        let Some(desired) = desired else {
            log::debug!("[Toggle] {:?} already pending for {}", kind, target.doc_path);
            return;
        };

        let services = services.clone();
        let target = target.clone();
        spawn_local(async move {
            let confirmed = request_toggle(kind, desired, &target, &services).await;
            state.update(|s| s.settle(desired, confirmed));
        });
    };

    let icon_class = move || {
        if hover.get() || state.with(|s| s.is_on()) {
            "action-icon filled"
        } else {
            "action-icon"
        }
    };

    view! {
        <div
            class="action-toggle"
            class:busy=move || state.with(|s| s.is_pending())
            on:mouseenter=move |_| set_hover.set(true)
            on:mouseleave=move |_| set_hover.set(false)
        >
            <span
                class=icon_class
                title=move || kind.tooltip(state.with(|s| s.is_on()))
                on:click=on_click
            >
                {icon}
            </span>
        </div>
    }
}
