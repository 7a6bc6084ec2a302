//! Toast Notifications
//!
//! `Notify` is the sink row actions report to. `ToastStore` is the reactive
//! implementation rendered by `ToastHost`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Drop every visible toast before showing this one
    pub clear: bool,
}

impl ToastOptions {
    pub fn clearing() -> Self {
        Self { clear: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Anything that can show a toast
pub trait Notify: Send + Sync {
    fn notify(&self, message: String, kind: ToastKind, options: ToastOptions);
}

/// Reactive toast queue
#[derive(Clone, Copy)]
pub struct ToastStore {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    duration_ms: u32,
}

impl ToastStore {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            duration_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Notify for ToastStore {
    fn notify(&self, message: String, kind: ToastKind, options: ToastOptions) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);

        self.toasts.update(|toasts| {
            if options.clear {
                toasts.clear();
            }
            toasts.push(Toast { id, message, kind });
        });

        let store = *self;
        Timeout::new(self.duration_ms, move || store.dismiss(id)).forget();
    }
}
