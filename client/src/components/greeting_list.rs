//! The greetings tab: count line, card grid and the empty-state prompt.

use leptos::prelude::*;

use crate::components::greeting_card::GreetingCard;
use crate::net::types::GreetingRecord;
use crate::state::board::{BoardPhase, BoardState};
use crate::util::text;

#[component]
pub fn GreetingList(
    board: RwSignal<BoardState>,
    on_copy: Callback<String>,
    on_watch: Callback<String>,
    on_create_first: Callback<()>,
) -> impl IntoView {
    let count_label = move || text::greetings_count_label(board.with(|s| s.videos.len()));
    let loading = move || board.with(|s| s.phase == BoardPhase::GreetingsLoading);
    let is_empty = move || board.with(|s| s.videos.is_empty());

    view! {
        <section class="greetings">
            <div class="greetings__header">
                <h2 class="greetings__heading">"Все поздравления"</h2>
                <p class="greetings__count">{count_label}</p>
                <Show when=loading>
                    <p class="greetings__loading">
                        <span class="icon icon--spinner" aria-hidden="true"></span>
                        {text::LOADING}
                    </p>
                </Show>
            </div>

            <div class="greetings__grid">
                <For
                    each=move || board.with(|s| s.videos.clone())
                    key=|record: &GreetingRecord| record.id.clone()
                    children=move |record: GreetingRecord| {
                        view! { <GreetingCard record=record on_copy=on_copy on_watch=on_watch/> }
                    }
                />
            </div>

            <Show when=is_empty>
                <div class="card greetings__empty">
                    <span class="icon icon--video icon--large" aria-hidden="true"></span>
                    <p class="greetings__empty-text">"Пока нет поздравлений"</p>
                    <button class="btn btn--primary" on:click=move |_| on_create_first.run(())>
                        <span class="icon icon--plus" aria-hidden="true"></span>
                        "Создать первое поздравление"
                    </button>
                </div>
            </Show>
        </section>
    }
}
