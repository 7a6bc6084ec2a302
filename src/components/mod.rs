//! UI Components
//!
//! Reusable Leptos components.

mod action_slot;
mod flag_toggle;
mod download_button;
mod remove_button;
mod file_row;
mod workspace_directory;
mod toast_host;
mod event_alerts;

pub use action_slot::ActionPlaceholder;
pub use flag_toggle::{PinToggle, WatchToggle};
pub use download_button::DownloadButton;
pub use remove_button::RemoveButton;
pub use file_row::WorkspaceFileRow;
pub use workspace_directory::{DirectoryHandle, WorkspaceDirectory};
pub use toast_host::ToastHost;
pub use event_alerts::DocumentEventAlerts;
