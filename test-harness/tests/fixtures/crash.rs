// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenario 3: a test that raises a segmentation fault. The
//! crash must not affect the sibling test registered in the same binary
//! (P7: "does not affect any later test").

use std::process::ExitCode;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::{assert_eq, test};

#[test(suite = "fixtures")]
fn crash(_status: &mut StatusInfo, _ctx: &mut TestContext) {
    unsafe {
        let p: *mut u8 = std::ptr::null_mut();
        *p = 1;
    }
}

#[test(suite = "fixtures")]
fn after_crash(status: &mut StatusInfo, _ctx: &mut TestContext) {
    assert_eq!(status, 1, 1);
}

fn main() -> ExitCode {
    test_harness::run()
}
