use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::{ApiError, decode_body};
use crate::net::types::{CreatedGreeting, GreetingDraft, GreetingRecord};
use crate::state::board::{BoardPhase, BoardState};
use crate::state::toast::ToastVariant;

impl BoardHandle for RefCell<BoardState> {
    fn with_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Scripted endpoint: pops queued responses and records every call.
#[derive(Default)]
struct FakeApi {
    list_calls: Cell<usize>,
    list_responses: RefCell<VecDeque<Result<Vec<GreetingRecord>, ApiError>>>,
    posted: RefCell<Vec<serde_json::Value>>,
    create_response: RefCell<Option<Result<CreatedGreeting, ApiError>>>,
    lookup_calls: Cell<usize>,
    lookup_response: RefCell<Option<Result<Option<GreetingRecord>, ApiError>>>,
}

impl FakeApi {
    fn with_lists(lists: Vec<Result<Vec<GreetingRecord>, ApiError>>) -> Self {
        Self { list_responses: RefCell::new(lists.into()), ..Self::default() }
    }
}

#[async_trait(?Send)]
impl GreetingsApi for FakeApi {
    async fn list_greetings(&self) -> Result<Vec<GreetingRecord>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list_responses.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_greeting(&self, draft: &GreetingDraft) -> Result<CreatedGreeting, ApiError> {
        self.posted.borrow_mut().push(serde_json::to_value(draft).unwrap());
        self.create_response
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Network("no response scripted".into())))
    }

    async fn get_greeting(&self, _id: &str) -> Result<Option<GreetingRecord>, ApiError> {
        self.lookup_calls.set(self.lookup_calls.get() + 1);
        self.lookup_response.borrow_mut().take().unwrap_or(Ok(None))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<ToastMessage>>,
}

impl Notifier for RecordingNotifier {
    fn push_toast(&self, message: ToastMessage) {
        self.messages.borrow_mut().push(message);
    }
}

fn sample_record() -> GreetingRecord {
    GreetingRecord {
        id: "1".into(),
        title: "A".into(),
        file_url: "u".into(),
        teacher_name: "T".into(),
        created_at: "t".into(),
    }
}

fn filled_board() -> RefCell<BoardState> {
    let mut state = BoardState::default();
    state.form = GreetingDraft {
        title: "Спасибо".into(),
        file_url: "https://youtu.be/xyz".into(),
        teacher_name: "Иванова М.А.".into(),
    };
    RefCell::new(state)
}

// =============================================================
// select_tab
// =============================================================

#[test]
fn entering_greetings_fetches_exactly_once() {
    let api = FakeApi::with_lists(vec![Ok(vec![sample_record()])]);
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));

    assert_eq!(api.list_calls.get(), 1);
    let state = board.borrow();
    assert_eq!(state.phase, BoardPhase::GreetingsLoaded);
    assert_eq!(state.videos, vec![sample_record()]);
    assert_eq!(text::greetings_count_label(state.videos.len()), "1 поздравлений от благодарных учеников");
    assert!(notifier.messages.borrow().is_empty());
}

#[test]
fn selecting_home_never_fetches() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Home));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Home));

    assert_eq!(api.list_calls.get(), 1);
    assert_eq!(board.borrow().active_tab(), ActiveTab::Home);
}

#[test]
fn reselecting_greetings_does_not_refetch_but_returning_does() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    assert_eq!(api.list_calls.get(), 1);

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Home));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    assert_eq!(api.list_calls.get(), 2);
}

#[test]
fn fetch_failure_keeps_list_and_shows_destructive_toast() {
    let api = FakeApi::with_lists(vec![
        Ok(vec![sample_record()]),
        Err(ApiError::Network("offline".into())),
    ]);
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Home));
    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));

    let state = board.borrow();
    assert_eq!(state.phase, BoardPhase::GreetingsError);
    assert_eq!(state.videos, vec![sample_record()]);
    let messages = notifier.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].variant, ToastVariant::Destructive);
    assert_eq!(messages[0].title, text::ERROR_TITLE);
    assert_eq!(messages[0].description, text::LOAD_FAILED);
}

#[test]
fn stale_refresh_is_discarded_without_toast() {
    let api = FakeApi::with_lists(vec![Err(ApiError::Network("late".into()))]);
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    let ticket = board.borrow_mut().select_tab(ActiveTab::Greetings).unwrap();
    board.borrow_mut().select_tab(ActiveTab::Home);

    let outcome = block_on(refresh_greetings(&api, &notifier, &board, ticket));
    assert_eq!(outcome, Some(FetchOutcome::Stale));
    assert!(notifier.messages.borrow().is_empty());
    assert_eq!(board.borrow().phase, BoardPhase::Home);
}

#[test]
fn empty_state_cta_returns_home_without_fetching() {
    let api = FakeApi::with_lists(vec![Ok(Vec::new())]);
    let notifier = RecordingNotifier::default();
    let board = RefCell::new(BoardState::default());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Greetings));
    assert!(board.borrow().videos.is_empty());

    block_on(select_tab(&api, &notifier, &board, ActiveTab::Home));
    assert_eq!(board.borrow().active_tab(), ActiveTab::Home);
    assert_eq!(api.list_calls.get(), 1);
}

// =============================================================
// submit_greeting
// =============================================================

#[test]
fn submit_posts_exact_form_body() {
    let api = FakeApi::default();
    *api.create_response.borrow_mut() = Some(Ok(CreatedGreeting { id: Some("xyz".into()), ..CreatedGreeting::default() }));
    let notifier = RecordingNotifier::default();
    let board = filled_board();

    block_on(submit_greeting(&api, &notifier, &board));

    assert_eq!(
        *api.posted.borrow(),
        vec![serde_json::json!({
            "title": "Спасибо",
            "file_url": "https://youtu.be/xyz",
            "teacher_name": "Иванова М.А."
        })]
    );
}

#[test]
fn submit_success_clears_form_switches_tab_and_refetches() {
    let api = FakeApi::with_lists(vec![Ok(vec![sample_record()])]);
    *api.create_response.borrow_mut() = Some(Ok(CreatedGreeting { id: Some("xyz".into()), ..CreatedGreeting::default() }));
    let notifier = RecordingNotifier::default();
    let board = filled_board();

    block_on(submit_greeting(&api, &notifier, &board));

    let state = board.borrow();
    assert_eq!(state.form, GreetingDraft::default());
    assert_eq!(state.active_tab(), ActiveTab::Greetings);
    assert!(!state.submitting);
    assert_eq!(api.list_calls.get(), 1);
    let messages = notifier.messages.borrow();
    assert_eq!(messages[0].title, text::SUBMIT_SUCCESS_TITLE);
    assert_eq!(messages[0].description, "Ваше поздравление загружено. ID: xyz");
}

#[test]
fn submit_with_json_error_body_still_counts_as_success() {
    let api = FakeApi::with_lists(vec![Ok(vec![sample_record()])]);
    let created = decode_body::<CreatedGreeting>(r#"{"error":"x"}"#);
    *api.create_response.borrow_mut() = Some(created);
    let notifier = RecordingNotifier::default();
    let board = filled_board();

    block_on(submit_greeting(&api, &notifier, &board));

    let state = board.borrow();
    assert_eq!(state.form, GreetingDraft::default());
    assert_eq!(state.active_tab(), ActiveTab::Greetings);
    assert_eq!(state.videos, vec![sample_record()]);
    assert_eq!(api.list_calls.get(), 1);
    let messages = notifier.messages.borrow();
    assert_eq!(messages[0].title, text::SUBMIT_SUCCESS_TITLE);
    assert_eq!(messages[0].description, "Ваше поздравление загружено.");
}

#[test]
fn submit_failure_preserves_form_and_resets_loading() {
    let api = FakeApi::default();
    *api.create_response.borrow_mut() = Some(Err(ApiError::Decode("expected value".into())));
    let notifier = RecordingNotifier::default();
    let board = filled_board();
    let before = board.borrow().form.clone();

    block_on(submit_greeting(&api, &notifier, &board));

    let state = board.borrow();
    assert_eq!(state.form, before);
    assert!(!state.submitting);
    assert_eq!(state.active_tab(), ActiveTab::Home);
    assert_eq!(api.list_calls.get(), 0);
    assert_eq!(notifier.messages.borrow()[0].variant, ToastVariant::Destructive);
}

#[test]
fn submit_with_empty_required_field_makes_no_request() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let board = filled_board();
    board.borrow_mut().form.teacher_name.clear();

    block_on(submit_greeting(&api, &notifier, &board));

    assert!(api.posted.borrow().is_empty());
    assert!(notifier.messages.borrow().is_empty());
    assert!(!board.borrow().submitting);
}

#[test]
fn submit_while_in_flight_makes_no_request() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let board = filled_board();
    board.borrow_mut().submitting = true;

    block_on(submit_greeting(&api, &notifier, &board));

    assert!(api.posted.borrow().is_empty());
}

// =============================================================
// lookup_greeting
// =============================================================

#[test]
fn lookup_returns_found_record() {
    let api = FakeApi::default();
    *api.lookup_response.borrow_mut() = Some(Ok(Some(sample_record())));
    let notifier = RecordingNotifier::default();

    let lookup = block_on(lookup_greeting(&api, &notifier, "1"));
    assert_eq!(lookup, VideoLookup::Found(sample_record()));
}

#[test]
fn lookup_maps_missing_record_to_not_found() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();

    let lookup = block_on(lookup_greeting(&api, &notifier, "nope"));
    assert_eq!(lookup, VideoLookup::NotFound);
    assert!(notifier.messages.borrow().is_empty());
}

#[test]
fn lookup_with_empty_id_skips_request() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();

    assert_eq!(block_on(lookup_greeting(&api, &notifier, "")), VideoLookup::NotFound);
    assert_eq!(api.lookup_calls.get(), 0);
}

#[test]
fn lookup_failure_notifies() {
    let api = FakeApi::default();
    *api.lookup_response.borrow_mut() = Some(Err(ApiError::Network("offline".into())));
    let notifier = RecordingNotifier::default();

    assert_eq!(block_on(lookup_greeting(&api, &notifier, "1")), VideoLookup::Failed);
    assert_eq!(notifier.messages.borrow()[0].variant, ToastVariant::Destructive);
}
