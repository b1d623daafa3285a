//! Sticky top navigation with the two tab buttons.

use leptos::prelude::*;

use crate::state::board::ActiveTab;
use crate::util::text;

#[component]
pub fn NavBar(#[prop(into)] active: Signal<ActiveTab>, on_select: Callback<ActiveTab>) -> impl IntoView {
    let tab_class = move |tab: ActiveTab| {
        if active.get() == tab { "btn nav-bar__tab nav-bar__tab--active" } else { "btn btn--ghost nav-bar__tab" }
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <div class="nav-bar__brand">
                    <span class="icon icon--graduation" aria-hidden="true"></span>
                    <h1 class="nav-bar__title">{text::APP_TITLE}</h1>
                </div>
                <div class="nav-bar__tabs">
                    <button
                        class=move || tab_class(ActiveTab::Home)
                        on:click=move |_| on_select.run(ActiveTab::Home)
                    >
                        <span class="icon icon--home" aria-hidden="true"></span>
                        {text::TAB_HOME}
                    </button>
                    <button
                        class=move || tab_class(ActiveTab::Greetings)
                        on:click=move |_| on_select.run(ActiveTab::Greetings)
                    >
                        <span class="icon icon--video" aria-hidden="true"></span>
                        {text::TAB_GREETINGS}
                    </button>
                </div>
            </div>
        </nav>
    }
}
