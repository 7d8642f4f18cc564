// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small, runnable tour of `test-harness`'s registration surface: two
//! suites, a handful of the assertion macros, and one setup/teardown pair.

use std::process::ExitCode;

use test_harness::context::TestContext;
use test_harness::outcome::StatusInfo;
use test_harness::{assert_eq, assert_not_null, assert_true, setup, teardown, test};

#[test(suite = "arithmetic")]
fn adds_two_numbers(status: &mut StatusInfo, _ctx: &mut TestContext) {
    assert_eq!(status, 2 + 2, 4);
}

#[test(suite = "arithmetic")]
fn rejects_a_wrong_sum(status: &mut StatusInfo, _ctx: &mut TestContext) {
    assert_eq!(status, 2 + 2, 5);
}

#[test(suite = "arithmetic")]
fn integer_division_truncates(status: &mut StatusInfo, _ctx: &mut TestContext) {
    assert_true!(status, 7 / 2 == 3);
}

#[setup]
fn open_counter(_status: &mut StatusInfo, ctx: &mut TestContext) {
    ctx.set::<u32>(0);
}

#[teardown]
fn close_counter(_status: &mut StatusInfo, ctx: &mut TestContext) {
    let _ = ctx.take::<u32>();
}

#[test(suite = "context", setup = open_counter, teardown = close_counter)]
fn counter_starts_at_zero(status: &mut StatusInfo, ctx: &mut TestContext) {
    let counter = ctx.get::<u32>();
    assert_not_null!(status, counter);
    assert_eq!(status, *counter.expect("checked above"), 0);
}

fn main() -> ExitCode {
    test_harness::run()
}
