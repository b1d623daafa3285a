//! Renders the toast store provided by `App`.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|s| s.toasts.clone())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.message.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{toast.message.title}</p>
                                <p class="toast__description">{toast.message.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Закрыть"
                                on:click=move |_| {
                                    toasts.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
