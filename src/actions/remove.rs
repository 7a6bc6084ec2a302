//! Remove From Workspace
//!
//! Drops the document's embedding link and reloads the directory. Failures
//! are logged only; the loading overlay is always cleared.

use crate::api::{ApiResult, DirectoryControl, WorkspaceApi};
use crate::feedback::{report_failure, REMOVE_FAILURES};
use crate::models::{DocTarget, EmbeddingChanges};
use crate::toast::Notify;

pub const REMOVING_MESSAGE: &str = "Removing file from workspace";

pub async fn remove_document(
    target: &DocTarget,
    api: &dyn WorkspaceApi,
    directory: &dyn DirectoryControl,
    notifier: &dyn Notify,
) -> bool {
    directory.set_loading(true);
    directory.set_loading_message(REMOVING_MESSAGE);

    let result: ApiResult<()> = async {
        api.modify_embeddings(&target.workspace_slug, &EmbeddingChanges::delete(target.doc_path.clone()))
            .await?;
        directory.refresh(true).await
    }
    .await;

    if let Err(e) = &result {
        report_failure(REMOVE_FAILURES, "Remove", "Failed to remove document:", e, notifier);
    } else {
        log::info!("[Remove] {} removed from {}", target.doc_path, target.workspace_slug);
    }

    directory.set_loading_message("");
    directory.set_loading(false);
    result.is_ok()
}
