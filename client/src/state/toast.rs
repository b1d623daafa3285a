//! Transient notifications.
//!
//! Components never talk to the toast store directly; they go through the
//! [`Notifier`] seam so workflows can be exercised without a live UI tree.
//! The store itself is an `RwSignal<ToastState>` provided as context by the
//! root `App` and rendered by `ToastStack`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Toasts visible at once; older ones are dropped first.
pub const TOAST_LIMIT: usize = 3;

/// Time a toast stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Content of a notification before it is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, message: ToastMessage) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message });
        if self.toasts.len() > TOAST_LIMIT {
            let excess = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn push_toast(&self, message: ToastMessage);
}

impl Notifier for RwSignal<ToastState> {
    fn push_toast(&self, message: ToastMessage) {
        let Some(id) = self.try_update(|s| s.push(message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            let _ = gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                toasts.try_update(|s| s.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
