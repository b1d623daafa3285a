//! Async workflows driving the board: tab switches with their list fetch,
//! form submit, and single-greeting lookup.
//!
//! Each workflow takes its collaborators as parameters (`GreetingsApi`,
//! `Notifier`, `BoardHandle`) so pages pass the real browser implementations
//! and tests pass fakes. State changes happen synchronously between awaits
//! through `BoardHandle::with_board`.

#[cfg(test)]
#[path = "board_actions_test.rs"]
mod board_actions_test;

use crate::net::api::GreetingsApi;
use crate::state::board::{ActiveTab, BoardHandle, FetchOutcome, FetchTicket};
use crate::state::toast::{Notifier, ToastMessage};
use crate::state::video::VideoLookup;
use crate::util::text;

/// Switch tabs, fetching the list when the switch enters the greetings tab.
pub async fn select_tab<A, N, B>(api: &A, notifier: &N, board: &B, tab: ActiveTab)
where
    A: GreetingsApi + ?Sized,
    N: Notifier + ?Sized,
    B: BoardHandle + ?Sized,
{
    let ticket = board.with_board(|s| s.select_tab(tab)).flatten();
    if let Some(ticket) = ticket {
        refresh_greetings(api, notifier, board, ticket).await;
    }
}

/// Fetch the list for `ticket` and apply it unless it has been superseded.
pub async fn refresh_greetings<A, N, B>(api: &A, notifier: &N, board: &B, ticket: FetchTicket) -> Option<FetchOutcome>
where
    A: GreetingsApi + ?Sized,
    N: Notifier + ?Sized,
    B: BoardHandle + ?Sized,
{
    let result = api.list_greetings().await;
    let outcome = board.with_board(|s| s.apply_fetch(ticket, result))?;
    match &outcome {
        FetchOutcome::Loaded(count) => leptos::logging::log!("loaded {count} greetings"),
        FetchOutcome::Failed(e) => {
            leptos::logging::warn!("greetings fetch failed: {e}");
            notifier.push_toast(ToastMessage::destructive(text::ERROR_TITLE, text::LOAD_FAILED));
        }
        FetchOutcome::Stale => leptos::logging::log!("discarding superseded greetings response"),
    }
    Some(outcome)
}

/// Post the form. On success the board switches to the greetings tab and
/// the list is re-fetched.
pub async fn submit_greeting<A, N, B>(api: &A, notifier: &N, board: &B)
where
    A: GreetingsApi + ?Sized,
    N: Notifier + ?Sized,
    B: BoardHandle + ?Sized,
{
    let Some(draft) = board.with_board(|s| s.begin_submit()).flatten() else {
        return;
    };
    let result = api.create_greeting(&draft).await;
    match &result {
        Ok(created) => notifier.push_toast(ToastMessage::info(
            text::SUBMIT_SUCCESS_TITLE,
            text::submit_success_description(created.id.as_deref()),
        )),
        Err(e) => {
            leptos::logging::warn!("greeting submit failed: {e}");
            notifier.push_toast(ToastMessage::destructive(text::ERROR_TITLE, text::LOAD_FAILED));
        }
    }
    let ticket = board.with_board(|s| s.finish_submit(&result)).flatten();
    if let Some(ticket) = ticket {
        refresh_greetings(api, notifier, board, ticket).await;
    }
}

/// Resolve a share-page id to a greeting.
pub async fn lookup_greeting<A, N>(api: &A, notifier: &N, id: &str) -> VideoLookup
where
    A: GreetingsApi + ?Sized,
    N: Notifier + ?Sized,
{
    if id.is_empty() {
        return VideoLookup::NotFound;
    }
    match api.get_greeting(id).await {
        Ok(Some(record)) => VideoLookup::Found(record),
        Ok(None) => VideoLookup::NotFound,
        Err(e) => {
            leptos::logging::warn!("greeting lookup failed: id={id} error={e}");
            notifier.push_toast(ToastMessage::destructive(text::ERROR_TITLE, text::LOAD_FAILED));
            VideoLookup::Failed
        }
    }
}
