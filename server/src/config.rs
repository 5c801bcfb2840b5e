//! Environment-variable parsing shared by startup and services.
//!
//! Every knob has a default; malformed values fall back to it rather than
//! aborting startup. Only `DATABASE_URL` is required, and `main` enforces that.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Parse `key` as `T`, falling back to `default` when unset or malformed.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Parse `key` as a boolean flag. Returns `None` when unset or unrecognized.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
