// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenario 6: setup allocates into the user-context slot, the
//! body reads it back, teardown disposes of it.

use std::process::ExitCode;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::{assert_eq, assert_not_null, setup, teardown, test};

#[setup]
fn alloc_five(_status: &mut StatusInfo, ctx: &mut TestContext) {
    ctx.set::<i32>(5);
}

#[teardown]
fn free_slot(_status: &mut StatusInfo, ctx: &mut TestContext) {
    let _ = ctx.take::<i32>();
}

#[test(suite = "fixtures", setup = alloc_five, teardown = free_slot)]
fn setup_teardown(status: &mut StatusInfo, ctx: &mut TestContext) {
    let value = ctx.get::<i32>();
    assert_not_null!(status, value);
    assert_eq!(status, *value.expect("checked above"), 5);
}

fn main() -> ExitCode {
    test_harness::run()
}
