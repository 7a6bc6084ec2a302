//! Document Event Alerts
//!
//! First-time explainers for pinning and watching, shown when the matching
//! event goes through the bus. Dismissal is remembered in localStorage.

use leptos::prelude::*;

use crate::context::use_row_services;
use crate::events::DocumentEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertKind {
    Pin,
    Watch,
}

impl AlertKind {
    fn for_event(event: DocumentEvent) -> Self {
        match event {
            DocumentEvent::Pinned => AlertKind::Pin,
            DocumentEvent::WatchStarted => AlertKind::Watch,
        }
    }

    fn storage_key(self) -> &'static str {
        match self {
            AlertKind::Pin => "workspace_docs_pin_alert_dismissed",
            AlertKind::Watch => "workspace_docs_watch_alert_dismissed",
        }
    }

    fn title(self) -> &'static str {
        match self {
            AlertKind::Pin => "What is document pinning?",
            AlertKind::Watch => "What does watching a document do?",
        }
    }

    fn body(self) -> &'static str {
        match self {
            AlertKind::Pin => {
                "A pinned document is sent in full with every chat in this workspace instead of \
                 only the passages matching the question. Pin small or essential documents: \
                 large pinned documents leave less room for the conversation."
            }
            AlertKind::Watch => {
                "A watched document is checked against its source on a schedule. When it \
                 changes, the new content is embedded again in every workspace using it."
            }
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn alert_dismissed(kind: AlertKind) -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(kind.storage_key()).ok().flatten())
        .is_some()
}

fn remember_dismissed(kind: AlertKind) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(kind.storage_key(), "1") {
            log::warn!("[Alerts] Could not persist dismissal: {:?}", e);
        }
    }
}

#[component]
pub fn DocumentEventAlerts() -> impl IntoView {
    let services = use_row_services();
    let active = RwSignal::new(None::<AlertKind>);

    let subscription = services.events.subscribe(move |event| {
        let kind = AlertKind::for_event(event);
        if !alert_dismissed(kind) {
            active.set(Some(kind));
        }
    });
    on_cleanup(move || drop(subscription));

    move || {
        active.get().map(|kind| {
            view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>{kind.title()}</h3>
                        <p>{kind.body()}</p>
                        <button
                            class="modal-confirm"
                            on:click=move |_| {
                                remember_dismissed(kind);
                                active.set(None);
                            }
                        >
                            "Okay, got it"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
