// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenario 5: a test that outlives `SOUFFLE_TIMEOUT`. The
//! driving test sets `SOUFFLE_TIMEOUT=1` before spawning this binary.

use std::process::ExitCode;
use std::time::Duration;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::test;

#[test(suite = "fixtures")]
fn timeout(_status: &mut StatusInfo, _ctx: &mut TestContext) {
    loop {
        std::thread::sleep(Duration::from_secs(60));
    }
}

fn main() -> ExitCode {
    test_harness::run()
}
