// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide configuration, sourced from the environment plus the
//! `--color` flag — no config file, matching the harness this crate
//! generalizes.

use std::env;
use std::time::Duration;

use crate::cli::ColorMode;

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Configuration read once at supervisor startup.
#[derive(Debug, Clone, Copy)]
pub struct HarnessConfig {
    /// Per-test timeout (`SOUFFLE_TIMEOUT`, whole seconds, default 20s).
    pub timeout: Duration,
    /// Resolved color behavior (`--color`, narrowed by `SOUFFLE_NOCOLOR`).
    pub color: ColorMode,
}

impl HarnessConfig {
    pub fn from_env_and_cli(color: ColorMode) -> Self {
        Self::from_vars(env::var("SOUFFLE_TIMEOUT").ok(), env::var_os("SOUFFLE_NOCOLOR").is_some(), color)
    }

    fn from_vars(timeout_var: Option<String>, nocolor_set: bool, color: ColorMode) -> Self {
        let timeout_secs = timeout_var.and_then(|s| s.parse::<u64>().ok()).unwrap_or(DEFAULT_TIMEOUT_SECS);
        // A literal 0 resets to the default, matching the source this
        // harness generalizes: `atoi()` returning 0 (unset or genuinely "0")
        // is not honored as "no timeout".
        let timeout_secs = if timeout_secs == 0 { DEFAULT_TIMEOUT_SECS } else { timeout_secs };

        // SOUFFLE_NOCOLOR narrows `auto` to `never` but never overrides an
        // explicit `--color always`.
        let color = match color {
            ColorMode::Auto if nocolor_set => ColorMode::Never,
            other => other,
        };

        Self {
            timeout: Duration::from_secs(timeout_secs),
            color,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            color: ColorMode::Auto,
        }
    }
}
