// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed outcome set a test execution can resolve to, and the
//! per-test mutable record (`StatusInfo`) a test body reports through.

use std::fmt;

/// Result of executing a single test.
///
/// The discriminants are load-bearing: the POSIX isolation runner exits
/// the child process with `outcome as i32`, and the parent recovers the
/// outcome from the child's exit code.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Success = 0,
    Fail = 1,
    Skip = 2,
    Timeout = 3,
    /// Only ever assigned by the isolation runner itself (signal death on
    /// POSIX, a caught panic/exception on the Windows worker thread) —
    /// never set directly by a test body.
    Crashed = 4,
}

impl Outcome {
    /// Recovers an `Outcome` from a child process exit code, as written by
    /// the isolation runner's child side. Returns `None` for any value the
    /// child never legitimately exits with.
    pub fn from_exit_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Outcome::Success),
            1 => Some(Outcome::Fail),
            2 => Some(Outcome::Skip),
            3 => Some(Outcome::Timeout),
            4 => Some(Outcome::Crashed),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Whether this outcome should flip the process exit code per P4:
    /// `Fail`, `Crashed`, and `Timeout` fail the run; `Skip` does not.
    pub fn fails_run(self) -> bool {
        matches!(self, Outcome::Fail | Outcome::Crashed | Outcome::Timeout)
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "PASSED",
            Outcome::Fail => "FAILED",
            Outcome::Skip => "SKIPPED",
            Outcome::Timeout => "TIMEOUT",
            Outcome::Crashed => "CRASHED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-test mutable record passed to the test body.
///
/// `outcome` starts at `Success` (R2) and `diagnostic` starts empty; the
/// assertion macros in [`crate::assertions`] are the only intended way to
/// mutate either field from inside a test body.
#[derive(Debug, Default)]
pub struct StatusInfo {
    outcome: Outcome,
    diagnostic: String,
}

impl StatusInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Appends to the diagnostic buffer (R3: append-only from the test
    /// author's perspective).
    pub fn log(&mut self, text: impl AsRef<str>) {
        self.diagnostic.push_str(text.as_ref());
    }

    /// Marks this test failed, appending a diagnostic. Does not return
    /// control flow to the caller — the `assert_*!`/`fail_test!` macros are
    /// responsible for the early `return`, since that's only expressible at
    /// the call site.
    pub fn fail(&mut self, diagnostic: impl AsRef<str>) {
        self.outcome = Outcome::Fail;
        self.log(diagnostic);
    }

    pub fn skip(&mut self) {
        self.outcome = Outcome::Skip;
    }

    pub fn is_fail(&self) -> bool {
        matches!(self.outcome, Outcome::Fail)
    }

    /// `None` for an empty diagnostic buffer, matching the wire contract's
    /// `L=0` "no diagnostic" case.
    pub fn diagnostic(&self) -> Option<&str> {
        if self.diagnostic.is_empty() {
            None
        } else {
            Some(&self.diagnostic)
        }
    }

    pub fn into_diagnostic(self) -> Option<String> {
        if self.diagnostic.is_empty() {
            None
        } else {
            Some(self.diagnostic)
        }
    }
}
