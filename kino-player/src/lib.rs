//! Kino: a desktop client for swiping through film recommendations.
//!
//! State lives in [`state::State`], messages are routed per domain through
//! [`update::update`], and all I/O happens in `Task`s spawned from the
//! update layer. The pure decision logic (deck, gesture, For You cache) is
//! kept free of iced types where possible so it can be tested directly.

pub mod app;
pub mod carousel;
pub mod deck;
pub mod for_you;
pub mod gesture;
pub mod infrastructure;
pub mod messages;
pub mod poster_cache;
pub mod session;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod updates;
pub mod view;
pub mod views;
