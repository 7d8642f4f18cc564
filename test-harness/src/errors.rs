// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harness-internal fatal errors — failures of the isolation mechanism
//! itself, not of a test. Per the error-handling model, these have no
//! recoverable path: a harness that cannot build its registry or spawn an
//! isolation unit cannot meaningfully continue, so `fatal` logs and aborts
//! the process rather than returning control to the supervisor.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to create outcome pipe: {0}")]
    PipeCreation(#[source] std::io::Error),

    #[cfg(unix)]
    #[error("failed to fork test child: {0}")]
    Fork(#[source] nix::errno::Errno),

    #[cfg(unix)]
    #[error("failed to install timeout handler: {0}")]
    SignalSetup(#[source] nix::errno::Errno),

    #[cfg(unix)]
    #[error("waitpid on test child failed: {0}")]
    Wait(#[source] nix::errno::Errno),

    #[cfg(windows)]
    #[error("failed to spawn isolation worker thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}

/// Logs `err` at error level and terminates the process with status 1.
///
/// Used exactly where the design calls for "abort with a diagnostic on the
/// error stream": registry population and isolation-unit creation. Never
/// used for test-level outcomes (Fail/Timeout/Crashed), which are data, not
/// Rust errors.
pub fn fatal(err: HarnessError) -> ! {
    tracing::error!(error = %err, "fatal harness error");
    std::process::exit(1);
}
