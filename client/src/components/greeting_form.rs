//! The "create greeting" form on the home tab.
//!
//! Inputs carry the native `required` attribute, so the browser blocks an
//! incomplete submit before `on_submit` ever runs.

use leptos::prelude::*;

use crate::state::board::{BoardState, DraftField};
use crate::util::text;

#[component]
pub fn GreetingForm(board: RwSignal<BoardState>, on_submit: Callback<()>) -> impl IntoView {
    let value_of = move |field: DraftField| board.with(|s| field.get(&s.form).to_owned());
    let set_value = move |field: DraftField, value: String| board.update(|s| field.set(&mut s.form, value));
    let submitting = move || board.with(|s| s.submitting);

    view! {
        <form
            class="greeting-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="greeting-form__field">
                <label class="greeting-form__label" for="title">"Название поздравления"</label>
                <input
                    id="title"
                    class="input"
                    type="text"
                    placeholder="Например: Поздравление классному руководителю"
                    required=true
                    prop:value=move || value_of(DraftField::Title)
                    on:input=move |ev| set_value(DraftField::Title, event_target_value(&ev))
                />
            </div>

            <div class="greeting-form__field">
                <label class="greeting-form__label" for="teacher">"Имя учителя"</label>
                <input
                    id="teacher"
                    class="input"
                    type="text"
                    placeholder="Например: Иванова Мария Александровна"
                    required=true
                    prop:value=move || value_of(DraftField::TeacherName)
                    on:input=move |ev| set_value(DraftField::TeacherName, event_target_value(&ev))
                />
            </div>

            <div class="greeting-form__field">
                <label class="greeting-form__label" for="video">"Ссылка на видео"</label>
                <textarea
                    id="video"
                    class="input input--textarea"
                    rows="3"
                    placeholder="Вставьте ссылку на видео (YouTube, Google Drive, и т.д.)"
                    required=true
                    prop:value=move || value_of(DraftField::FileUrl)
                    on:input=move |ev| set_value(DraftField::FileUrl, event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="btn btn--primary btn--block" disabled=submitting>
                <span
                    class=move || if submitting() { "icon icon--spinner" } else { "icon icon--send" }
                    aria-hidden="true"
                ></span>
                {move || text::submit_button_label(submitting())}
            </button>
        </form>
    }
}
