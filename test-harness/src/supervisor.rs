// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The supervisor loop: iterates the registry, drives the isolation runner
//! per test, tallies outcomes, and streams progress to the reporter.

use std::process::ExitCode;

use crossterm::terminal;

use crate::config::HarnessConfig;
use crate::registry::Registry;
use crate::reporter::{Reporter, RunStats};
use crate::runner::run_isolated;

/// Fallback column width when the terminal size can't be probed (piped
/// output, CI, etc.) — wide enough for the longest test names we expect.
const FALLBACK_WIDTH: usize = 80;

/// Runs every test in `registry` under `config` and returns the process
/// exit code (P4: `1` iff any Fail/Crashed/Timeout occurred).
pub fn run(registry: &Registry, config: &HarnessConfig) -> ExitCode {
    let width = terminal_width(registry.max_name_len());
    let reporter = Reporter::new(config.color, width);

    reporter
        .run_started(registry.total_count(), registry.suite_count())
        .expect("failed to write to stdout");

    let mut stats = RunStats::default();
    let start = std::time::Instant::now();

    for (suite, tests) in registry.iter() {
        reporter.suite_started(suite).expect("failed to write to stdout");
        for test in tests {
            let run_status = run_isolated(test, config.timeout);
            stats.record(run_status.outcome);
            reporter
                .test_result(test.name, run_status.outcome, run_status.elapsed, run_status.diagnostic.as_deref())
                .expect("failed to write to stdout");
        }
    }

    reporter.summary(&stats, start.elapsed()).expect("failed to write to stdout");

    if stats.failed_run() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Clamps the reporter's column width to `[name_length, terminal_cols-4]`,
/// per the supervisor protocol. Falls back to a fixed width when the
/// terminal size can't be determined (e.g. output is piped).
fn terminal_width(name_length: usize) -> usize {
    let cols = terminal::size().map(|(cols, _rows)| cols as usize).unwrap_or(FALLBACK_WIDTH);
    cols.saturating_sub(4).max(name_length)
}
