//! Greeting board state machine.
//!
//! DESIGN
//! ======
//! The board is in exactly one [`BoardPhase`]. Entering the greetings tab
//! hands out a [`FetchTicket`] stamped with a fresh generation; leaving the
//! tab or re-entering it bumps the generation again, so a response that lands
//! after the user moved on is recognised as stale and dropped instead of
//! overwriting the list.
//!
//! Transitions are pure and synchronous. The async glue that performs the
//! HTTP calls lives in `util::board_actions`.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{CreatedGreeting, GreetingDraft, GreetingRecord};

/// The two top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Home,
    Greetings,
}

/// Tab plus fetch status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardPhase {
    #[default]
    Home,
    GreetingsLoading,
    GreetingsLoaded,
    GreetingsError,
}

impl BoardPhase {
    #[must_use]
    pub fn tab(self) -> ActiveTab {
        match self {
            Self::Home => ActiveTab::Home,
            Self::GreetingsLoading | Self::GreetingsLoaded | Self::GreetingsError => ActiveTab::Greetings,
        }
    }
}

/// Proof that a list fetch was requested by a particular tab activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// What happened to a fetch result handed to [`BoardState::apply_fetch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with this many records.
    Loaded(usize),
    /// The fetch failed; the previous list is kept.
    Failed(ApiError),
    /// A newer activation superseded this fetch; nothing changed.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub phase: BoardPhase,
    pub videos: Vec<GreetingRecord>,
    pub form: GreetingDraft,
    /// A create request is in flight.
    pub submitting: bool,
    generation: u64,
}

impl BoardState {
    #[must_use]
    pub fn active_tab(&self) -> ActiveTab {
        self.phase.tab()
    }

    /// Switch tabs. Returns a ticket when the switch enters the greetings
    /// tab and the list must be fetched; re-selecting the current tab is a
    /// no-op.
    pub fn select_tab(&mut self, tab: ActiveTab) -> Option<FetchTicket> {
        if tab == self.active_tab() {
            return None;
        }
        self.generation += 1;
        match tab {
            ActiveTab::Home => {
                self.phase = BoardPhase::Home;
                None
            }
            ActiveTab::Greetings => {
                self.phase = BoardPhase::GreetingsLoading;
                Some(FetchTicket { generation: self.generation })
            }
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the result of the fetch identified by `ticket`.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<GreetingRecord>, ApiError>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(videos) => {
                let count = videos.len();
                self.videos = videos;
                self.phase = BoardPhase::GreetingsLoaded;
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                self.phase = BoardPhase::GreetingsError;
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Start a submit. Returns the body to post, or `None` when a submit is
    /// already in flight or a required field is empty.
    pub fn begin_submit(&mut self) -> Option<GreetingDraft> {
        if self.submitting || !self.form.is_complete() {
            return None;
        }
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Finish a submit. On success the form is cleared and the board moves
    /// to the greetings tab, returning the ticket for the re-fetch. On
    /// failure the form is left as typed.
    pub fn finish_submit(&mut self, result: &Result<CreatedGreeting, ApiError>) -> Option<FetchTicket> {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.form = GreetingDraft::default();
                self.select_tab(ActiveTab::Greetings)
            }
            Err(_) => None,
        }
    }
}

/// One input of the greeting form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    TeacherName,
    FileUrl,
}

impl DraftField {
    #[must_use]
    pub fn get(self, draft: &GreetingDraft) -> &str {
        match self {
            Self::Title => &draft.title,
            Self::TeacherName => &draft.teacher_name,
            Self::FileUrl => &draft.file_url,
        }
    }

    pub fn set(self, draft: &mut GreetingDraft, value: String) {
        match self {
            Self::Title => draft.title = value,
            Self::TeacherName => draft.teacher_name = value,
            Self::FileUrl => draft.file_url = value,
        }
    }
}

/// Shared access to a [`BoardState`] from async workflows.
///
/// `None` means the state is gone (the owning page was disposed).
pub trait BoardHandle {
    fn with_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R>;
}

impl BoardHandle for RwSignal<BoardState> {
    fn with_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
