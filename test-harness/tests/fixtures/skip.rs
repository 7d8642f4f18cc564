// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenario 4: `skip_test!` must short-circuit the rest of the
//! body — the assertion after it must never run.

use std::process::ExitCode;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::{assert_eq, skip_test, test};

#[test(suite = "fixtures")]
fn skip(status: &mut StatusInfo, _ctx: &mut TestContext) {
    skip_test!(status);
    #[allow(unreachable_code)]
    {
        assert_eq!(status, 2, 1);
    }
}

fn main() -> ExitCode {
    test_harness::run()
}
