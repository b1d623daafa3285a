//! Share page for a single greeting at `/video/{id}`.
//!
//! The lookup runs in the browser only; the server renders the loading
//! state and hydration takes over from there.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::site_footer::SiteFooter;
use crate::net::types::GreetingRecord;
use crate::state::toast::ToastState;
use crate::state::video::VideoLookup;
use crate::util::text;

#[component]
pub fn VideoPage() -> impl IntoView {
    let params = use_params_map();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let lookup = RwSignal::new(VideoLookup::Loading);

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        lookup.set(VideoLookup::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::util::board_actions::lookup_greeting(&crate::net::api::HttpGreetingsApi, &toasts, &id).await;
            lookup.set(result);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, toasts);
        }
    });

    view! {
        <div class="page">
            <main class="page__main video-page">
                {move || match lookup.get() {
                    VideoLookup::Loading => {
                        view! {
                            <p class="video-page__status">
                                <span class="icon icon--spinner" aria-hidden="true"></span>
                                {text::LOADING}
                            </p>
                        }
                            .into_any()
                    }
                    VideoLookup::Found(record) => view! { <VideoDetails record=record/> }.into_any(),
                    VideoLookup::NotFound => {
                        view! {
                            <div class="card video-page__missing">
                                <span class="icon icon--video icon--large" aria-hidden="true"></span>
                                <p class="video-page__status">{text::VIDEO_NOT_FOUND}</p>
                            </div>
                        }
                            .into_any()
                    }
                    VideoLookup::Failed => {
                        view! { <p class="video-page__status">{text::LOAD_FAILED}</p> }.into_any()
                    }
                }}
                <a class="btn btn--ghost video-page__back" href="/">
                    "← "
                    {text::APP_TITLE}
                </a>
            </main>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn VideoDetails(record: GreetingRecord) -> impl IntoView {
    let GreetingRecord { title, file_url, teacher_name, .. } = record;
    let teacher = (!teacher_name.is_empty()).then_some(teacher_name);

    view! {
        <article class="card video-page__card">
            <h2 class="video-page__title">{title}</h2>
            {teacher
                .map(|name| {
                    view! {
                        <p class="greeting-card__teacher">
                            <span class="icon icon--user" aria-hidden="true"></span>
                            {name}
                        </p>
                    }
                })}
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    if !crate::util::browser::open_in_new_tab(&file_url) {
                        leptos::logging::warn!("could not open video in a new tab: {file_url}");
                    }
                }
            >
                <span class="icon icon--play" aria-hidden="true"></span>
                "Смотреть"
            </button>
        </article>
    }
}
