use anyhow::Context;
use std::{fs, path::Path};

/// Looks a setting up in the positional argument at `position`, then in the
/// environment variable `key`, and falls back to `default`.
/// Call `dotenv::dotenv()` first if a `.env` file should count.
pub fn setting(position: usize, key: &str, default: &str) -> String {
    if let Some(arg) = std::env::args().nth(position) {
        return arg;
    }
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// "1", "true", "yes" and "on" (any case) switch a flag on.
pub fn flag(key: &str) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}

pub fn read_input(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Couldn't read {}", path.display()))
}
