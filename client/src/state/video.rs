//! State of the single-greeting page served at `/video/{id}`.

use crate::net::types::GreetingRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoLookup {
    #[default]
    Loading,
    Found(GreetingRecord),
    /// The endpoint has no greeting with that id.
    NotFound,
    /// The lookup failed for another reason; a toast was shown.
    Failed,
}
