//! Share links for greetings.
//!
//! A share link is `<origin>/video/<id>`. Copying goes through the
//! [`Clipboard`] seam and always ends in a toast: a confirmation on success,
//! a destructive one when the clipboard is missing or refuses the write.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use async_trait::async_trait;

use crate::state::toast::{Notifier, ToastMessage};
use crate::util::text;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is exposed to this page (insecure context, old browser).
    #[error("clipboard unavailable")]
    Unavailable,
    /// The browser rejected the write (permissions, focus).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// System clipboard access.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Route path of a greeting's share page.
#[must_use]
pub fn share_path(id: &str) -> String {
    format!("/video/{id}")
}

/// Absolute share link for `id` under `origin`.
#[must_use]
pub fn share_link(origin: &str, id: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), share_path(id))
}

/// Copy the share link of greeting `id` and report the outcome.
///
/// # Errors
///
/// Returns the clipboard failure after a destructive toast has been shown.
pub async fn copy_share_link<C, N>(
    clipboard: &C,
    notifier: &N,
    origin: &str,
    id: &str,
) -> Result<String, ClipboardError>
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    let link = share_link(origin, id);
    match clipboard.write_text(&link).await {
        Ok(()) => {
            notifier.push_toast(ToastMessage::info(text::COPIED_TITLE, text::COPIED_DESCRIPTION));
            Ok(link)
        }
        Err(e) => {
            leptos::logging::warn!("copy share link failed: {e}");
            notifier.push_toast(ToastMessage::destructive(text::ERROR_TITLE, text::COPY_FAILED));
            Err(e)
        }
    }
}
