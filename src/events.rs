//! Document Event Bus
//!
//! Fire-and-forget notifications published by the row actions ("a pin was
//! requested", "a watch was requested"). Delivery is synchronous, in
//! subscription order, to whoever is subscribed at publish time.

use std::sync::{Arc, Mutex, Weak};

use crate::feedback::warn_on_err;

/// Events published by the row actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Pinned,
    WatchStarted,
}

impl DocumentEvent {
    /// DOM event name used when forwarding to `window`
    pub fn dom_name(self) -> &'static str {
        match self {
            DocumentEvent::Pinned => "pinned_document",
            DocumentEvent::WatchStarted => "watch_document_for_changes",
        }
    }
}

type Listener = Arc<dyn Fn(DocumentEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Cloneable handle to a shared listener list
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered while the returned
    /// subscription is alive
    pub fn subscribe(&self, listener: impl Fn(DocumentEvent) + Send + Sync + 'static) -> Subscription {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            id: Some(id),
            bus: Arc::downgrade(&self.inner),
        }
    }

    pub fn publish(&self, event: DocumentEvent) {
        // Listeners run outside the lock so they may (un)subscribe
        let listeners: Vec<Listener> = match self.inner.lock() {
            Ok(inner) => inner.listeners.iter().map(|(_, l)| l.clone()).collect(),
            Err(poisoned) => poisoned.into_inner().listeners.iter().map(|(_, l)| l.clone()).collect(),
        };
        log::debug!("[Events] {:?} -> {} listener(s)", event, listeners.len());
        for listener in listeners {
            listener(event);
        }
    }
}

/// Unsubscribes on drop
pub struct Subscription {
    id: Option<u64>,
    bus: Weak<Mutex<BusInner>>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the bus
    pub fn detach(mut self) {
        self.id = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let (Some(id), Some(bus)) = (self.id, self.bus.upgrade()) else {
            return;
        };
        if let Ok(mut inner) = bus.lock() {
            inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        };
    }
}

/// Re-emit every bus event as a DOM `CustomEvent` on `window`
pub fn forward_to_window(bus: &EventBus) -> Subscription {
    bus.subscribe(|event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::CustomEvent::new(event.dom_name()) {
            Ok(dom_event) => {
                warn_on_err("Events", event.dom_name(), window.dispatch_event(&dom_event));
            }
            Err(e) => log::warn!("[Events] Could not create {}: {:?}", event.dom_name(), e),
        }
    })
}
