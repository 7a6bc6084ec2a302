//! Failure Presentation
//!
//! The row actions do not surface failures the same way: pin/watch show the
//! error detail, download shows a fixed message, remove only logs. Each
//! action names its policy here instead of hand-rolling the toast.

use std::fmt::{Debug, Display};

use crate::toast::{Notify, ToastKind, ToastOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Toast `"<headline> <error>"`
    ShowDetail,
    /// Toast a fixed message, detail only goes to the log
    ShowFixed(&'static str),
    /// Log only
    LogOnly,
}

pub const TOGGLE_FAILURES: FailurePolicy = FailurePolicy::ShowDetail;
pub const DOWNLOAD_FAILURES: FailurePolicy = FailurePolicy::ShowFixed("Failed to download file");
pub const REMOVE_FAILURES: FailurePolicy = FailurePolicy::LogOnly;

/// Log a failure and present it according to `policy`
pub fn report_failure(
    policy: FailurePolicy,
    scope: &str,
    headline: &str,
    error: &dyn Display,
    notifier: &dyn Notify,
) {
    log::error!("[{}] {} {}", scope, headline, error);
    match policy {
        FailurePolicy::ShowDetail => notifier.notify(
            format!("{} {}", headline, error),
            ToastKind::Error,
            ToastOptions::clearing(),
        ),
        FailurePolicy::ShowFixed(message) => {
            notifier.notify(message.to_string(), ToastKind::Error, ToastOptions::clearing())
        }
        FailurePolicy::LogOnly => {}
    }
}

/// Warn about a failed browser side effect, keeping the value on success
pub fn warn_on_err<T, E: Debug>(scope: &str, what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[{}] {} failed: {:?}", scope, what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn test_show_detail_includes_error() {
        let notifier = RecordingNotifier::default();
        report_failure(TOGGLE_FAILURES, "Pin", "Failed to pin document.", &"boom", &notifier);
        assert_eq!(notifier.errors(), vec!["Failed to pin document. boom".to_string()]);
        assert!(notifier.all_cleared());
    }

    #[test]
    fn test_show_fixed_hides_error() {
        let notifier = RecordingNotifier::default();
        report_failure(DOWNLOAD_FAILURES, "Download", "Error downloading file:", &"404", &notifier);
        assert_eq!(notifier.errors(), vec!["Failed to download file".to_string()]);
    }

    #[test]
    fn test_log_only_is_silent() {
        let notifier = RecordingNotifier::default();
        report_failure(REMOVE_FAILURES, "Remove", "Failed to remove document:", &"boom", &notifier);
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn test_warn_on_err_keeps_success() {
        assert_eq!(warn_on_err::<_, String>("Events", "dispatch", Ok(true)), Some(true));
        assert_eq!(warn_on_err::<bool, _>("Download", "revoke", Err("gone".to_string())), None);
    }
}
