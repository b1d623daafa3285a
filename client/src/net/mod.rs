//! Networking modules for the remote greetings endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `GreetingsApi` seam, and `types`
//! defines the JSON wire schema shared by list, lookup and create.

pub mod api;
pub mod types;
