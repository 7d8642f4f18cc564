// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Self-contained unit-test harness with per-test process isolation.
//!
//! Test authors register tests with [`test_harness_macros::test`], optionally
//! paired with `#[setup]`/`#[teardown]`, and build a binary around [`run`]:
//!
//! ```ignore
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     test_harness::run()
//! }
//! ```
//!
//! A segfault, abort, or runaway loop inside one test's body cannot kill or
//! hang the rest of the run — see [`runner`] for how isolation is achieved
//! on each platform.

pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod outcome;
pub mod outcome_channel;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod supervisor;
pub mod assertions;

pub use test_harness_macros::{setup, teardown, test};

// Re-exported so `#[test_harness::test]`'s expansion can reach
// `inventory::submit!` without requiring every consuming crate to also
// depend on `inventory` directly.
pub use inventory;

pub use config::HarnessConfig;
pub use context::TestContext;
pub use errors::HarnessError;
pub use outcome::{Outcome, StatusInfo};
pub use registry::{RegisteredTest, Registry, Test};

use std::process::ExitCode;

use clap::Parser;

/// Parses CLI args, installs a `tracing` subscriber, collects the registry
/// populated by every `#[test_harness_macros::test]` in the binary, and
/// drives the supervisor loop to completion.
pub fn run() -> ExitCode {
    let opts = cli::Opts::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = HarnessConfig::from_env_and_cli(opts.color);
    let registry = Registry::collect();

    supervisor::run(&registry, &config)
}
