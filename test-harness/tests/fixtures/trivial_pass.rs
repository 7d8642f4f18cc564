// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenario 1: a single trivially passing test.

use std::process::ExitCode;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::{assert_eq, test};

#[test(suite = "fixtures")]
fn trivial_pass(status: &mut StatusInfo, _ctx: &mut TestContext) {
    assert_eq!(status, 1, 1);
}

fn main() -> ExitCode {
    test_harness::run()
}
