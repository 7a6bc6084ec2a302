//! Row Actions
//!
//! Backend round trips behind the row's action icons, kept free of view code.

mod toggle;
mod download;
mod remove;

pub use toggle::{request_toggle, ToggleKind, ToggleState};
pub use download::{download_item, BrowserTransfer, LocalFileServer, StorageUrlResolver};
pub use remove::remove_document;
