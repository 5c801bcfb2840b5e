//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the session plumbing shared by the bootstrap and the login
//! page, kept out of the components so it can be tested without a browser.

pub mod auth;
