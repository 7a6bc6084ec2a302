//! Document Download
//!
//! Resolve the item's fetchable URL, fetch it, hand it to the browser as a
//! save-as download.

use std::fmt;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::commands::js_error_to_string;
use crate::feedback::{report_failure, warn_on_err, DOWNLOAD_FAILURES};
use crate::models::DocumentItem;
use crate::toast::Notify;

const LOCAL_FILE_SCHEME: &str = "file://";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub enum DownloadError {
    /// Server answered with a non-success status
    Status { status: u16, status_text: String },
    Network(String),
    Browser(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Status { status, status_text } => {
                write!(f, "Failed to fetch file: {} ({})", status_text, status)
            }
            DownloadError::Network(msg) => write!(f, "Network error: {}", msg),
            DownloadError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Maps an item to the URL its bytes can be fetched from
pub trait StorageUrlResolver: Send + Sync {
    fn resolve(&self, item: &DocumentItem) -> String;
}

/// Serves `file://` documents from a local HTTP file server, keyed by title
///
/// Local storage paths are not fetchable cross-origin, so the file server
/// must expose each document under its encoded title.
#[derive(Debug, Clone)]
pub struct LocalFileServer {
    base_url: String,
}

impl LocalFileServer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl StorageUrlResolver for LocalFileServer {
    fn resolve(&self, item: &DocumentItem) -> String {
        if !item.url.starts_with(LOCAL_FILE_SCHEME) {
            return item.url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            utf8_percent_encode(&item.title, URI_COMPONENT)
        )
    }
}

/// Name offered in the save dialog
pub fn download_file_name(item: &DocumentItem) -> &str {
    if item.title.is_empty() {
        "download"
    } else {
        &item.title
    }
}

/// Fetch + save mechanics
#[async_trait(?Send)]
pub trait FileTransfer {
    type Payload;

    async fn fetch(&self, url: &str) -> Result<Self::Payload, DownloadError>;

    fn save(&self, payload: Self::Payload, file_name: &str) -> Result<(), DownloadError>;
}

/// Download an item, toasting a fixed message on any failure
pub async fn download_item<T: FileTransfer>(
    item: &DocumentItem,
    resolver: &dyn StorageUrlResolver,
    transfer: &T,
    notifier: &dyn Notify,
) -> bool {
    let url = resolver.resolve(item);
    log::debug!("[Download] {} -> {}", item.url, url);

    let result = match transfer.fetch(&url).await {
        Ok(payload) => transfer.save(payload, download_file_name(item)),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            report_failure(DOWNLOAD_FAILURES, "Download", "Error downloading file:", &e, notifier);
            false
        }
    }
}

// ========================
// Browser implementation
// ========================

fn browser_err(err: JsValue) -> DownloadError {
    DownloadError::Browser(js_error_to_string(err))
}

/// `fetch` + object URL + transient `<a download>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransfer;

#[async_trait(?Send)]
impl FileTransfer for BrowserTransfer {
    type Payload = web_sys::Blob;

    async fn fetch(&self, url: &str) -> Result<web_sys::Blob, DownloadError> {
        let window = web_sys::window().ok_or_else(|| DownloadError::Browser("no window".to_string()))?;

        let init = web_sys::RequestInit::new();
        init.set_mode(web_sys::RequestMode::Cors);

        let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
            .await
            .map_err(|e| DownloadError::Network(js_error_to_string(e)))?;
        let response: web_sys::Response = response.dyn_into().map_err(browser_err)?;

        if !response.ok() {
            return Err(DownloadError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let blob = JsFuture::from(response.blob().map_err(browser_err)?)
            .await
            .map_err(|e| DownloadError::Network(js_error_to_string(e)))?;
        blob.dyn_into::<web_sys::Blob>().map_err(browser_err)
    }

    fn save(&self, payload: web_sys::Blob, file_name: &str) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError::Browser("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| DownloadError::Browser("no body".to_string()))?;

        let object_url = web_sys::Url::create_object_url_with_blob(&payload).map_err(browser_err)?;
        let link: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser_err)?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("<a> is not an anchor".to_string()))?;
        link.set_href(&object_url);
        link.set_download(file_name);

        let appended = body.append_child(&link).map_err(browser_err);
        if appended.is_ok() {
            link.click();
        }
        warn_on_err("Download", "revoke object URL", web_sys::Url::revoke_object_url(&object_url));
        link.remove();
        appended.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_item, RecordingNotifier};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records what would have been fetched and saved
    #[derive(Default)]
    struct FakeTransfer {
        status: Option<u16>,
        fetched: RefCell<Vec<String>>,
        saved: RefCell<Vec<(Vec<u8>, String)>>,
    }

    #[async_trait(?Send)]
    impl FileTransfer for FakeTransfer {
        type Payload = Vec<u8>;

        async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
            self.fetched.borrow_mut().push(url.to_string());
            match self.status {
                Some(status) => Err(DownloadError::Status {
                    status,
                    status_text: "Not Found".to_string(),
                }),
                None => Ok(b"%PDF".to_vec()),
            }
        }

        fn save(&self, payload: Vec<u8>, file_name: &str) -> Result<(), DownloadError> {
            self.saved.borrow_mut().push((payload, file_name.to_string()));
            Ok(())
        }
    }

    fn resolver() -> LocalFileServer {
        LocalFileServer::new("http://localhost:8888/files")
    }

    fn local_item(title: &str) -> DocumentItem {
        let mut item = make_item("a", "report.pdf-1.json");
        item.url = "file:///var/data/report.pdf".to_string();
        item.title = title.to_string();
        item
    }

    #[test]
    fn test_local_file_rewritten_to_file_server() {
        assert_eq!(
            resolver().resolve(&local_item("My Report")),
            "http://localhost:8888/files/My%20Report"
        );
    }

    #[test]
    fn test_encoding_matches_uri_component() {
        assert_eq!(
            resolver().resolve(&local_item("a&b/c (v2)!.pdf")),
            "http://localhost:8888/files/a%26b%2Fc%20(v2)!.pdf"
        );
    }

    #[test]
    fn test_remote_url_untouched() {
        let mut item = local_item("x");
        item.url = "https://example.com/report.pdf".to_string();
        assert_eq!(resolver().resolve(&item), "https://example.com/report.pdf");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let resolver = LocalFileServer::new("http://files.local/");
        assert_eq!(resolver.resolve(&local_item("x.txt")), "http://files.local/x.txt");
    }

    #[test]
    fn test_file_name_fallback() {
        assert_eq!(download_file_name(&local_item("")), "download");
        assert_eq!(download_file_name(&local_item("My Report")), "My Report");
    }

    #[test]
    fn test_download_saves_under_title() {
        let transfer = FakeTransfer::default();
        let notifier = RecordingNotifier::default();

        let ok = block_on(download_item(&local_item("My Report"), &resolver(), &transfer, &notifier));

        assert!(ok);
        assert_eq!(*transfer.fetched.borrow(), vec!["http://localhost:8888/files/My%20Report".to_string()]);
        assert_eq!(*transfer.saved.borrow(), vec![(b"%PDF".to_vec(), "My Report".to_string())]);
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn test_bad_status_never_saves() {
        let transfer = FakeTransfer {
            status: Some(404),
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();

        let ok = block_on(download_item(&local_item("My Report"), &resolver(), &transfer, &notifier));

        assert!(!ok);
        assert!(transfer.saved.borrow().is_empty());
        assert_eq!(notifier.errors(), vec!["Failed to download file".to_string()]);
        assert_eq!(notifier.toasts().len(), 1);
    }

    #[test]
    fn test_status_error_display() {
        let err = DownloadError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch file: Not Found (404)");
    }
}
