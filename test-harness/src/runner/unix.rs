// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! POSIX isolation backend: one `fork` per test, a `SIGALRM`-driven timeout
//! armed in the child, and the diagnostic relayed back over a pipe.
//!
//! The original harness this crate generalizes uses `vfork` here for its
//! memory-sharing properties; this backend uses a plain `fork` instead,
//! since `vfork`'s "child shares the parent's stack until it calls `_exit`
//! or `exec`" contract is incompatible with running arbitrary setup/body/
//! teardown code in the child (see DESIGN.md).

use std::io::Write;
use std::time::{Duration, Instant};

use nix::sys::signal::{self, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{alarm, fork, ForkResult};

use crate::context::TestContext;
use crate::errors::{fatal, HarnessError};
use crate::outcome::{Outcome, StatusInfo};
use crate::outcome_channel::{read_diagnostic, DiagnosticWriter};
use crate::registry::Test;

use super::TestRunStatus;

extern "C" fn timeout_handler(_signo: i32) {
    // Async-signal-safe enough in practice for this harness's purposes: the
    // same approach the original timeout handler uses. Exits the child
    // directly with the Timeout exit code; the parent never sees partial
    // output from a test that's still "running" past its timeout.
    std::process::exit(Outcome::Timeout as i32);
}

pub(super) fn run_isolated(test: &Test, timeout: Duration) -> TestRunStatus {
    let (reader, writer) = std::io::pipe().unwrap_or_else(|e| fatal(HarnessError::PipeCreation(e)));

    let start = Instant::now();

    // Safety: the child's path below only runs test setup/body/teardown and
    // then exits — it never returns across the fork boundary, matching the
    // "no return into caller's stack frame" contract `fork` requires of
    // well-behaved callers in a multi-threaded process.
    let fork_result = unsafe { fork() }.unwrap_or_else(|e| fatal(HarnessError::Fork(e)));
    match fork_result {
        ForkResult::Child => {
            drop(reader);
            run_child(test, timeout, writer);
            unreachable!("run_child always exits the process");
        }
        ForkResult::Parent { child } => {
            drop(writer);
            let diagnostic = read_diagnostic(reader);
            let wait_status = waitpid(child, None).unwrap_or_else(|e| fatal(HarnessError::Wait(e)));
            let elapsed = start.elapsed();

            let outcome = classify(wait_status);
            TestRunStatus {
                outcome,
                elapsed,
                diagnostic,
            }
        }
    }
}

/// Runs in the forked child. Never returns: always exits the process with
/// the numeric outcome tag as its exit code.
fn run_child(test: &Test, timeout: Duration, writer: std::io::PipeWriter) -> ! {
    unsafe {
        signal::sigaction(
            Signal::SIGALRM,
            &signal::SigAction::new(
                SigHandler::Handler(timeout_handler),
                signal::SaFlags::empty(),
                signal::SigSet::empty(),
            ),
        )
        .unwrap_or_else(|e| fatal(HarnessError::SignalSetup(e)));
    }
    alarm::set(timeout.as_secs().max(1) as u32);

    let mut status = StatusInfo::new();
    let mut ctx = TestContext::new();

    if let Some(setup) = test.setup {
        setup(&mut status, &mut ctx);
    }
    // A Skip raised in setup must not run the body (R2/P6's "do not execute
    // subsequent statements" extends to setup skipping the body outright).
    if status.outcome() == Outcome::Success {
        (test.body)(&mut status, &mut ctx);
    }
    if let Some(teardown) = test.teardown {
        teardown(&mut status, &mut ctx);
    }

    let diagnostic = status.diagnostic().map(str::to_owned);
    let outcome = status.outcome();

    let mut writer = writer;
    let write_result = DiagnosticWriter::new(&mut writer).write_diagnostic(diagnostic.as_deref());
    // SIGPIPE / a dead reader: the diagnostic is lost, but the outcome tag
    // still arrives via the exit code, per the documented edge case.
    let _ = write_result;
    let _ = writer.flush();
    drop(writer);

    std::process::exit(outcome as i32);
}

fn classify(status: WaitStatus) -> Outcome {
    match status {
        WaitStatus::Exited(_, code) => {
            Outcome::from_exit_code(code).unwrap_or(Outcome::Crashed)
        }
        WaitStatus::Signaled(..) => Outcome::Crashed,
        // Anything else (stopped, continued, ptrace events) shouldn't occur
        // for a `waitpid` with no WUNTRACED/WCONTINUED flags; treat it the
        // same as an abnormal termination rather than panicking the
        // supervisor over a test it didn't control.
        _ => Outcome::Crashed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(_status: &mut StatusInfo, _ctx: &mut TestContext) {}

    fn failing(status: &mut StatusInfo, _ctx: &mut TestContext) {
        status.fail("expected 2, got 1");
    }

    fn skipping(status: &mut StatusInfo, _ctx: &mut TestContext) {
        status.skip();
    }

    fn sleeps_forever(_status: &mut StatusInfo, _ctx: &mut TestContext) {
        loop {
            std::thread::sleep(Duration::from_secs(3600));
        }
    }

    fn segfaults(_status: &mut StatusInfo, _ctx: &mut TestContext) {
        unsafe {
            let p: *mut u8 = std::ptr::null_mut();
            *p = 1;
        }
    }

    fn make_test(body: crate::registry::TestBody) -> Test {
        Test {
            suite: "unix_backend",
            name: "t",
            body,
            setup: None,
            teardown: None,
        }
    }

    #[test]
    fn classifies_success() {
        let run = run_isolated(&make_test(passing), Duration::from_secs(5));
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(run.diagnostic, None);
    }

    #[test]
    fn classifies_fail_with_diagnostic() {
        let run = run_isolated(&make_test(failing), Duration::from_secs(5));
        assert_eq!(run.outcome, Outcome::Fail);
        assert_eq!(run.diagnostic.as_deref(), Some("expected 2, got 1"));
    }

    #[test]
    fn classifies_skip() {
        let run = run_isolated(&make_test(skipping), Duration::from_secs(5));
        assert_eq!(run.outcome, Outcome::Skip);
    }

    #[test]
    fn classifies_timeout() {
        let run = run_isolated(&make_test(sleeps_forever), Duration::from_secs(1));
        assert_eq!(run.outcome, Outcome::Timeout);
        assert!(run.elapsed < Duration::from_secs(3));
    }

    #[test]
    fn classifies_crash() {
        let run = run_isolated(&make_test(segfaults), Duration::from_secs(5));
        assert_eq!(run.outcome, Outcome::Crashed);
    }
}
