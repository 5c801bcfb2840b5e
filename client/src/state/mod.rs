//! Client-side state held in Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for who is signed in; `listing`
//! tracks fetch status for the searchable list pages.

pub mod listing;
pub mod session;
