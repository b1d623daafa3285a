//! The greeting board: navigation, the home tab with the create form, and
//! the greetings tab with the list.
//!
//! The page owns the `BoardState` signal and launches the async workflows
//! from `util::board_actions` in response to clicks. Only the active tab is
//! mounted; switching tabs is driven by a memo so typing in the form does
//! not rebuild the branch.

use leptos::prelude::*;

use crate::components::greeting_form::GreetingForm;
use crate::components::greeting_list::GreetingList;
use crate::components::nav_bar::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::state::board::{ActiveTab, BoardState};
use crate::state::toast::ToastState;

#[component]
pub fn GreetingBoardPage() -> impl IntoView {
    let board = RwSignal::new(BoardState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let active_tab = Memo::new(move |_| board.with(BoardState::active_tab));

    let on_select = Callback::new(move |tab: ActiveTab| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::board_actions::select_tab(&crate::net::api::HttpGreetingsApi, &toasts, &board, tab).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tab, toasts);
        }
    });

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::board_actions::submit_greeting(&crate::net::api::HttpGreetingsApi, &toasts, &board).await;
        });
    });

    let on_copy = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let origin = crate::util::browser::current_origin().unwrap_or_default();
            let _ = crate::util::share::copy_share_link(&crate::util::browser::BrowserClipboard, &toasts, &origin, &id)
                .await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_watch = Callback::new(move |url: String| {
        if !crate::util::browser::open_in_new_tab(&url) {
            leptos::logging::warn!("could not open video in a new tab: {url}");
        }
    });

    let on_create_first = Callback::new(move |()| on_select.run(ActiveTab::Home));

    view! {
        <div class="page">
            <NavBar active=active_tab on_select=on_select/>
            <main class="page__main">
                {move || match active_tab.get() {
                    ActiveTab::Home => view! { <HomeTab board=board on_submit=on_submit/> }.into_any(),
                    ActiveTab::Greetings => {
                        view! {
                            <GreetingList
                                board=board
                                on_copy=on_copy
                                on_watch=on_watch
                                on_create_first=on_create_first
                            />
                        }
                            .into_any()
                    }
                }}
            </main>
            <SiteFooter/>
        </div>
    }
}

/// Hero, the two feature cards, and the create form.
#[component]
fn HomeTab(board: RwSignal<BoardState>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <section class="home">
            <div class="home__hero">
                <h2 class="home__heading">"Поздравьте своих учителей!"</h2>
                <p class="home__lead">"Загрузите видео-поздравление и поделитесь им по уникальной ссылке"</p>
            </div>

            <div class="home__features">
                <div class="card feature-card">
                    <span class="icon icon--upload feature-card__icon" aria-hidden="true"></span>
                    <h3 class="feature-card__title">"Загрузите видео"</h3>
                    <p class="feature-card__text">"Добавьте ссылку на ваше видео-поздравление"</p>
                </div>
                <div class="card feature-card">
                    <span class="icon icon--share feature-card__icon" aria-hidden="true"></span>
                    <h3 class="feature-card__title">"Поделитесь"</h3>
                    <p class="feature-card__text">"Получите уникальную ссылку без регистрации"</p>
                </div>
            </div>

            <div class="card home__form-card">
                <h3 class="home__form-title">
                    <span class="icon icon--heart" aria-hidden="true"></span>
                    "Создать поздравление"
                </h3>
                <p class="home__form-hint">"Заполните форму ниже, чтобы добавить своё видео"</p>
                <GreetingForm board=board on_submit=on_submit/>
            </div>
        </section>
    }
}
