//! Pin / Watch Toggles
//!
//! Both toggles share one flow: broadcast intent (only when switching on),
//! ask the backend, toast the outcome, and flip local state only after the
//! backend confirmed.

use crate::context::RowServices;
use crate::events::DocumentEvent;
use crate::feedback::{report_failure, TOGGLE_FAILURES};
use crate::models::DocTarget;
use crate::toast::{ToastKind, ToastOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Pin,
    Watch,
}

impl ToggleKind {
    fn scope(self) -> &'static str {
        match self {
            ToggleKind::Pin => "Pin",
            ToggleKind::Watch => "Watch",
        }
    }

    fn verb(self, desired: bool) -> &'static str {
        match (self, desired) {
            (ToggleKind::Pin, true) => "pin",
            (ToggleKind::Pin, false) => "unpin",
            (ToggleKind::Watch, true) => "watch",
            (ToggleKind::Watch, false) => "unwatch",
        }
    }

    pub fn success_message(self, desired: bool) -> String {
        match (self, desired) {
            (ToggleKind::Pin, true) => "Document pinned to workspace".to_string(),
            (ToggleKind::Pin, false) => "Document unpinned from workspace".to_string(),
            (ToggleKind::Watch, true) => "Document will be watched for changes.".to_string(),
            (ToggleKind::Watch, false) => "Document will no longer be watched for changes.".to_string(),
        }
    }

    /// Backend answered but declined
    pub fn declined_message(self, desired: bool) -> String {
        format!("Failed to {} document.", self.verb(desired))
    }

    /// Prefix for thrown errors; direction-agnostic
    pub fn error_headline(self) -> &'static str {
        match self {
            ToggleKind::Pin => "Failed to pin document.",
            ToggleKind::Watch => "Failed to watch document.",
        }
    }

    pub fn tooltip(self, on: bool) -> &'static str {
        match (self, on) {
            (ToggleKind::Pin, true) => "Un-Pin from workspace",
            (ToggleKind::Pin, false) => "Pin to workspace",
            (ToggleKind::Watch, true) => "Stop watching for changes",
            (ToggleKind::Watch, false) => "Watch document for changes",
        }
    }

    pub fn intent_event(self) -> DocumentEvent {
        match self {
            ToggleKind::Pin => DocumentEvent::Pinned,
            ToggleKind::Watch => DocumentEvent::WatchStarted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    Idle,
    Pending,
}

/// Local mirror of a backend flag plus the in-flight guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    on: bool,
    phase: TogglePhase,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on, phase: TogglePhase::Idle }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_pending(&self) -> bool {
        self.phase == TogglePhase::Pending
    }

    /// Enter `Pending` and return the value to request, or `None` while a
    /// request is already in flight
    pub fn begin(&mut self) -> Option<bool> {
        if self.is_pending() {
            return None;
        }
        self.phase = TogglePhase::Pending;
        Some(!self.on)
    }

    pub fn settle(&mut self, desired: bool, confirmed: bool) {
        if confirmed {
            self.on = desired;
        }
        self.phase = TogglePhase::Idle;
    }
}

/// Run one toggle request; returns whether the backend confirmed it
pub async fn request_toggle(
    kind: ToggleKind,
    desired: bool,
    target: &DocTarget,
    services: &RowServices,
) -> bool {
    if desired {
        services.events.publish(kind.intent_event());
    }

    let result = match kind {
        ToggleKind::Pin => {
            services
                .workspace_api
                .set_pin_for_document(&target.workspace_slug, &target.doc_path, desired)
                .await
        }
        ToggleKind::Watch => {
            services
                .live_sync
                .set_watch_status_for_document(&target.workspace_slug, &target.doc_path, desired)
                .await
        }
    };

    let notifier = services.notifier.as_ref();
    match result {
        Ok(true) => {
            log::info!("[{}] {} -> {}", kind.scope(), target.doc_path, desired);
            notifier.notify(kind.success_message(desired), ToastKind::Success, ToastOptions::clearing());
            true
        }
        Ok(false) => {
            log::warn!("[{}] Backend declined {} for {}", kind.scope(), kind.verb(desired), target.doc_path);
            notifier.notify(kind.declined_message(desired), ToastKind::Error, ToastOptions::clearing());
            false
        }
        Err(e) => {
            report_failure(TOGGLE_FAILURES, kind.scope(), kind.error_headline(), &e, notifier);
            false
        }
    }
}
