//! Session store for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context by `App`. Pages read it through
//! the getters to gate UI; only the sign-in flow and the navigation bar mutate
//! it, through `login` and `logout`.
//!
//! DESIGN
//! ======
//! The identity lives in a single private field. `login` writes it, `logout`
//! clears it and every getter reads it, so a logout can never leave stale
//! identity data visible. Each mutation is reported to the diagnostic logger
//! with the before/after login state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Identity record produced by the external sign-in flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Server-side user identifier, when the backend supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Empty when the provider has no photo; a `null` decodes the same way.
    #[serde(rename = "photoURL", default, deserialize_with = "null_as_empty")]
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Identity {
    #[must_use]
    pub fn new(display_name: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self { id: None, display_name: display_name.into(), photo_url: photo_url.into(), email: None }
    }

    /// Decode an identity payload as delivered by the sign-in callback.
    ///
    /// # Errors
    ///
    /// `MissingIdentity` for a `null` payload, `MalformedIdentity` when the
    /// payload is not an object with a usable `displayName`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, SessionError> {
        if value.is_null() {
            return Err(SessionError::MissingIdentity);
        }
        let identity: Self = serde_json::from_value(value.clone())
            .map_err(|e| SessionError::MalformedIdentity(e.to_string()))?;
        identity.validate()?;
        Ok(identity)
    }

    fn validate(&self) -> Result<(), SessionError> {
        if self.display_name.trim().is_empty() {
            return Err(SessionError::MalformedIdentity("displayName is empty".to_owned()));
        }
        Ok(())
    }
}

/// Rejections raised by session mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no identity supplied")]
    MissingIdentity,
    #[error("malformed identity: {0}")]
    MalformedIdentity(String),
}

/// Who is logged in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<Identity>,
}

impl SessionState {
    /// Replace the current session with `identity`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentity` and leaves the session untouched when the
    /// identity has no display name.
    pub fn login(&mut self, identity: Identity) -> Result<(), SessionError> {
        if let Err(e) = identity.validate() {
            log::warn!(target: "session", "login rejected: {e}");
            return Err(e);
        }
        let before = self.is_logged_in();
        log::info!(target: "session", "login as {:?}", identity.display_name);
        self.user = Some(identity);
        log_transition("login", before, self.is_logged_in());
        Ok(())
    }

    /// Clear the session.
    pub fn logout(&mut self) {
        let before = self.is_logged_in();
        self.user = None;
        log_transition("logout", before, self.is_logged_in());
    }

    /// Display name of the signed-in user; `None` when logged out.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.display_name.as_str())
    }

    /// Profile photo URL of the signed-in user; `None` when logged out.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.photo_url.as_str())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.user.as_ref()
    }
}

fn log_transition(mutation: &str, before: bool, after: bool) {
    log::debug!(target: "session", "mutation {mutation}: logged_in {before} -> {after}");
}
