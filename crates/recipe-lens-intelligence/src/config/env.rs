// ABOUTME: Typed environment variable parsing shared by every configuration section
// ABOUTME: Trims values and warns about unparseable input before falling back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Parse `key` from the environment.
///
/// Returns `None` when the variable is unset or cannot be parsed; the latter is
/// logged so typos do not pass silently.
#[must_use]
pub fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(variable = key, value = %raw, "Ignoring unparseable environment value");
    }
    parsed
}

/// Parse `key` from the environment, keeping `default` when unset or invalid
#[must_use]
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env_parse(key).unwrap_or(default)
}
