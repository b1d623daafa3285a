//! Card for one greeting in the list.

#[cfg(test)]
#[path = "greeting_card_test.rs"]
mod greeting_card_test;

use leptos::prelude::*;

use crate::net::types::GreetingRecord;
use crate::util::share::share_path;

/// What a card shows, derived from a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreetingCardModel {
    pub id: String,
    pub title: String,
    /// `None` hides the teacher line.
    pub teacher: Option<String>,
    pub share_path: String,
    pub file_url: String,
}

impl From<GreetingRecord> for GreetingCardModel {
    fn from(record: GreetingRecord) -> Self {
        let share_path = share_path(&record.id);
        Self {
            teacher: (!record.teacher_name.is_empty()).then_some(record.teacher_name),
            id: record.id,
            title: record.title,
            share_path,
            file_url: record.file_url,
        }
    }
}

#[component]
pub fn GreetingCard(
    record: GreetingRecord,
    on_copy: Callback<String>,
    on_watch: Callback<String>,
) -> impl IntoView {
    let GreetingCardModel { id, title, teacher, share_path, file_url } = record.into();

    view! {
        <article class="card greeting-card">
            <header class="greeting-card__header">
                <span class="greeting-card__badge">
                    <span class="icon icon--video" aria-hidden="true"></span>
                </span>
                <h3 class="greeting-card__title">{title}</h3>
            </header>
            {teacher
                .map(|name| {
                    view! {
                        <p class="greeting-card__teacher">
                            <span class="icon icon--user" aria-hidden="true"></span>
                            {name}
                        </p>
                    }
                })}
            <div class="greeting-card__share">
                <p class="greeting-card__share-label">"Ссылка для просмотра:"</p>
                <code class="greeting-card__share-path">{share_path}</code>
            </div>
            <div class="greeting-card__actions">
                <button class="btn btn--outline btn--small" on:click=move |_| on_copy.run(id.clone())>
                    <span class="icon icon--copy" aria-hidden="true"></span>
                    "Копировать"
                </button>
                <button class="btn btn--primary btn--small" on:click=move |_| on_watch.run(file_url.clone())>
                    <span class="icon icon--play" aria-hidden="true"></span>
                    "Смотреть"
                </button>
            </div>
        </article>
    }
}
