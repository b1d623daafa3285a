//! Browser glue: location origin, new-tab navigation, clipboard.
//!
//! Every function degrades to a no-op/`None`/error outside the browser so
//! components can call them unconditionally during SSR.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use crate::util::share::{Clipboard, ClipboardError};

/// `window.location.origin`, e.g. `https://example.org`.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Open `url` in a new tab. Returns `false` if the browser blocked it.
pub fn open_in_new_tab(url: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        false
    }
}

/// The page's `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "hydrate")]
        {
            let clipboard = web_sys::window()
                .and_then(|w| w.navigator().clipboard())
                .ok_or(ClipboardError::Unavailable)?;
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}
