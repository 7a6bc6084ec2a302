//! Row Services Context
//!
//! Backend handles shared by every row, provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::actions::StorageUrlResolver;
use crate::api::{LiveSyncApi, WorkspaceApi};
use crate::events::EventBus;
use crate::toast::Notify;

/// Collaborators the row actions talk to
#[derive(Clone)]
pub struct RowServices {
    pub workspace_api: Arc<dyn WorkspaceApi>,
    pub live_sync: Arc<dyn LiveSyncApi>,
    /// Where downloads are fetched from
    pub storage_urls: Arc<dyn StorageUrlResolver>,
    pub notifier: Arc<dyn Notify>,
    pub events: EventBus,
}

/// Get the row services from context
pub fn use_row_services() -> RowServices {
    expect_context::<RowServices>()
}
