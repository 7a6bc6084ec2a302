//! In-memory fakes for the service traits (test builds only).

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::actions::LocalFileServer;
use crate::api::{ApiError, ApiResult, DirectoryControl, LiveSyncApi, WorkspaceApi};
use crate::context::RowServices;
use crate::events::{DocumentEvent, EventBus};
use crate::models::{DocumentItem, EmbeddingChanges, WorkspaceRef};
use crate::toast::{Notify, ToastKind, ToastOptions};

pub fn make_item(id: &str, name: &str) -> DocumentItem {
    DocumentItem {
        id: id.to_string(),
        name: name.to_string(),
        title: name.to_string(),
        url: format!("https://example.com/{}", name),
        published: None,
        pinned_workspaces: Vec::new(),
        watched: false,
        can_watch: false,
    }
}

pub fn make_workspace(id: u32) -> WorkspaceRef {
    WorkspaceRef {
        id,
        slug: format!("ws-{}", id),
        name: format!("Workspace {}", id),
    }
}

/// Records every toast
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<(String, ToastKind, ToastOptions)>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(String, ToastKind, ToastOptions)> {
        self.toasts.lock().unwrap().clone()
    }

    fn of_kind(&self, kind: ToastKind) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(message, _, _)| message)
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(ToastKind::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_kind(ToastKind::Error)
    }

    pub fn all_cleared(&self) -> bool {
        self.toasts().iter().all(|(_, _, options)| options.clear)
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, message: String, kind: ToastKind, options: ToastOptions) {
        self.toasts.lock().unwrap().push((message, kind, options));
    }
}

/// Scripted backend answer
#[derive(Debug, Clone)]
pub enum Reply {
    Accepted,
    Declined,
    Fail(ApiError),
}

impl Reply {
    fn as_flag(&self) -> ApiResult<bool> {
        match self {
            Reply::Accepted => Ok(true),
            Reply::Declined => Ok(false),
            Reply::Fail(e) => Err(e.clone()),
        }
    }
}

struct BackendState {
    pin_reply: Reply,
    watch_reply: Reply,
    embeddings_reply: Reply,
    pin_calls: Vec<(String, String, bool)>,
    watch_calls: Vec<(String, String, bool)>,
    embedding_calls: Vec<(String, EmbeddingChanges)>,
    published: Vec<DocumentEvent>,
}

/// Fake workspace + live sync backend sharing one call log
#[derive(Clone)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
    pub notifier: RecordingNotifier,
    pub events: EventBus,
}

impl FakeBackend {
    pub fn new() -> Self {
        let state = Arc::new(Mutex::new(BackendState {
            pin_reply: Reply::Accepted,
            watch_reply: Reply::Accepted,
            embeddings_reply: Reply::Accepted,
            pin_calls: Vec::new(),
            watch_calls: Vec::new(),
            embedding_calls: Vec::new(),
            published: Vec::new(),
        }));
        let events = EventBus::new();
        let sink = state.clone();
        events
            .subscribe(move |event| sink.lock().unwrap().published.push(event))
            .detach();
        Self {
            state,
            notifier: RecordingNotifier::default(),
            events,
        }
    }

    pub fn services(&self) -> RowServices {
        RowServices {
            workspace_api: Arc::new(self.clone()),
            live_sync: Arc::new(self.clone()),
            storage_urls: Arc::new(LocalFileServer::new("http://localhost:8888/files")),
            notifier: Arc::new(self.notifier.clone()),
            events: self.events.clone(),
        }
    }

    pub fn set_pin_reply(&self, reply: Reply) {
        self.state.lock().unwrap().pin_reply = reply;
    }

    pub fn set_watch_reply(&self, reply: Reply) {
        self.state.lock().unwrap().watch_reply = reply;
    }

    pub fn set_embeddings_reply(&self, reply: Reply) {
        self.state.lock().unwrap().embeddings_reply = reply;
    }

    pub fn pin_calls(&self) -> Vec<(String, String, bool)> {
        self.state.lock().unwrap().pin_calls.clone()
    }

    pub fn watch_calls(&self) -> Vec<(String, String, bool)> {
        self.state.lock().unwrap().watch_calls.clone()
    }

    pub fn embedding_calls(&self) -> Vec<(String, EmbeddingChanges)> {
        self.state.lock().unwrap().embedding_calls.clone()
    }

    pub fn published(&self) -> Vec<DocumentEvent> {
        self.state.lock().unwrap().published.clone()
    }
}

#[async_trait(?Send)]
impl WorkspaceApi for FakeBackend {
    async fn modify_embeddings(&self, slug: &str, changes: &EmbeddingChanges) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.embedding_calls.push((slug.to_string(), changes.clone()));
        state.embeddings_reply.as_flag().map(|_| ())
    }

    async fn set_pin_for_document(&self, slug: &str, doc_path: &str, pinned: bool) -> ApiResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.pin_calls.push((slug.to_string(), doc_path.to_string(), pinned));
        state.pin_reply.as_flag()
    }
}

#[async_trait(?Send)]
impl LiveSyncApi for FakeBackend {
    async fn set_watch_status_for_document(&self, slug: &str, doc_path: &str, watched: bool) -> ApiResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.watch_calls.push((slug.to_string(), doc_path.to_string(), watched));
        state.watch_reply.as_flag()
    }
}

/// Records loading/refresh calls from the row
#[derive(Default)]
pub struct FakeDirectory {
    fail_refresh: bool,
    loading: RefCell<Vec<bool>>,
    messages: RefCell<Vec<String>>,
    refreshes: RefCell<Vec<bool>>,
}

impl FakeDirectory {
    pub fn failing_refresh() -> Self {
        Self {
            fail_refresh: true,
            ..Default::default()
        }
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading.borrow().clone()
    }

    pub fn message_history(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn refreshes(&self) -> Vec<bool> {
        self.refreshes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DirectoryControl for FakeDirectory {
    fn set_loading(&self, loading: bool) {
        self.loading.borrow_mut().push(loading);
    }

    fn set_loading_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    async fn refresh(&self, force: bool) -> ApiResult<()> {
        self.refreshes.borrow_mut().push(force);
        if self.fail_refresh {
            Err(ApiError::Rejected("listing unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}
