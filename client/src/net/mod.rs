//! Networking modules for the BodyMap REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the server handlers.

pub mod api;
pub mod types;
