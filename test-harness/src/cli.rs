// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line surface. Deliberately thin: this harness has no test
//! filtering or tag selection (explicit non-goals), so `--color` is the only
//! flag beyond what `clap` gives a struct for free (`--help`, `--version`).

use clap::{Parser, ValueEnum};

/// Color behavior. Mirrors the `SOUFFLE_NOCOLOR` environment variable
/// contract: `auto` (the default) still honors `SOUFFLE_NOCOLOR` and
/// terminal detection; `always`/`never` override both unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Always,
    Auto,
    Never,
}

#[derive(Debug, Parser)]
#[command(
    name = "test-harness",
    about = "Self-contained unit-test harness with per-test process isolation"
)]
pub struct Opts {
    /// Controls ANSI color output.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,
}
