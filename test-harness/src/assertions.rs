// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assertion macros: the author-facing vocabulary for failing a test.
//!
//! Every macro here takes the in-scope `StatusInfo` as its first argument.
//! On failure it appends a diagnostic (including `file!()`/`line!()`) and
//! returns from the enclosing function immediately — the harness depends on
//! this early return for its "first failure is final" contract (§6); there
//! is no propagation mechanism, the macro performs the control-flow escape
//! itself.
//!
//! `assert_eq!`/`assert_ne!` deliberately shadow the standard library macros
//! of the same name for any module that glob-imports this module; they are
//! not reexports of `std::assert_eq!` and do not panic.

/// Fails the test with `message`, recording `file!()`/`line!()`.
#[macro_export]
macro_rules! fail_test {
    ($status:expr, $($arg:tt)*) => {{
        $status.fail(format!("{} at {}:{}", format!($($arg)*), file!(), line!()));
        return;
    }};
}

/// Marks the test Skip and returns immediately; no diagnostic is recorded.
#[macro_export]
macro_rules! skip_test {
    ($status:expr) => {{
        $status.skip();
        return;
    }};
}

/// Appends `message` to the diagnostic buffer without changing the outcome.
#[macro_export]
macro_rules! log_msg {
    ($status:expr, $($arg:tt)*) => {{
        $status.log(format!($($arg)*));
    }};
}

/// Like [`log_msg!`], but prefixes the message with `file!()`/`line!()`.
#[macro_export]
macro_rules! log_trace_msg {
    ($status:expr, $($arg:tt)*) => {{
        $status.log(format!("[{}:{}] {}\n", file!(), line!(), format!($($arg)*)));
    }};
}

#[macro_export]
macro_rules! assert_true {
    ($status:expr, $cond:expr) => {
        if !($cond) {
            $crate::fail_test!($status, "expected {} to be true", stringify!($cond));
        }
    };
}

#[macro_export]
macro_rules! assert_false {
    ($status:expr, $cond:expr) => {
        if $cond {
            $crate::fail_test!($status, "expected {} to be false", stringify!($cond));
        }
    };
}

#[macro_export]
macro_rules! assert_eq {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if left != right {
            $crate::fail_test!(
                $status,
                "Expected: {:?}\nGot: {:?}",
                left,
                right
            );
        }
    }};
}

#[macro_export]
macro_rules! assert_ne {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if left == right {
            $crate::fail_test!($status, "expected {:?} != {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_lt {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if !(left < right) {
            $crate::fail_test!($status, "expected {:?} < {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_lte {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if !(left <= right) {
            $crate::fail_test!($status, "expected {:?} <= {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_gt {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if !(left > right) {
            $crate::fail_test!($status, "expected {:?} > {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_gte {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if !(left >= right) {
            $crate::fail_test!($status, "expected {:?} >= {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_null {
    ($status:expr, $ptr:expr) => {
        if !($ptr.is_none()) {
            $crate::fail_test!($status, "expected {} to be null", stringify!($ptr));
        }
    };
}

#[macro_export]
macro_rules! assert_not_null {
    ($status:expr, $ptr:expr) => {
        if $ptr.is_none() {
            $crate::fail_test!($status, "expected {} to be non-null", stringify!($ptr));
        }
    };
}

#[macro_export]
macro_rules! assert_ptr_eq {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right): (*const _, *const _) = ($left, $right);
        if left != right {
            $crate::fail_test!($status, "expected pointers {:p} and {:p} to be equal", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_ptr_ne {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right): (*const _, *const _) = ($left, $right);
        if left == right {
            $crate::fail_test!($status, "expected pointers {:p} and {:p} to differ", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_str_eq {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right): (&str, &str) = (AsRef::as_ref(&$left), AsRef::as_ref(&$right));
        if left != right {
            $crate::fail_test!($status, "Expected: {:?}\nGot: {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_str_ne {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right): (&str, &str) = (AsRef::as_ref(&$left), AsRef::as_ref(&$right));
        if left == right {
            $crate::fail_test!($status, "expected {:?} != {:?}", left, right);
        }
    }};
}

/// Shared body for the three numeric-array assertions: they differ only in
/// element type, which Rust's generic equality already handles.
#[macro_export]
macro_rules! assert_arr_eq {
    ($status:expr, $left:expr, $right:expr) => {{
        let (left, right): (&[_], &[_]) = (&$left, &$right);
        if left != right {
            $crate::fail_test!($status, "Expected: {:?}\nGot: {:?}", left, right);
        }
    }};
}

#[macro_export]
macro_rules! assert_int_arr_eq {
    ($status:expr, $left:expr, $right:expr) => {
        $crate::assert_arr_eq!($status, $left, $right)
    };
}

#[macro_export]
macro_rules! assert_uint_arr_eq {
    ($status:expr, $left:expr, $right:expr) => {
        $crate::assert_arr_eq!($status, $left, $right)
    };
}

/// Float arrays compare with a small epsilon rather than bitwise equality,
/// since the original assertion family is meant for measured/computed data.
#[macro_export]
macro_rules! assert_float_arr_eq {
    ($status:expr, $left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right): (&[f64], &[f64]) = (&$left, &$right);
        let matches = left.len() == right.len()
            && left.iter().zip(right.iter()).all(|(a, b)| (a - b).abs() <= $epsilon);
        if !matches {
            $crate::fail_test!($status, "Expected: {:?}\nGot: {:?}", left, right);
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::context::TestContext;
    use crate::outcome::{Outcome, StatusInfo};

    fn passes(status: &mut StatusInfo, _ctx: &mut TestContext) {
        assert_eq!(status, 1, 1);
        assert_true!(status, true);
    }

    fn fails_with_diagnostic(status: &mut StatusInfo, _ctx: &mut TestContext) {
        assert_eq!(status, 2, 1);
        // unreachable: the macro above returns on failure.
        status.log("should not run");
    }

    fn skips_before_failing(status: &mut StatusInfo, _ctx: &mut TestContext) {
        skip_test!(status);
        #[allow(unreachable_code)]
        {
            assert_eq!(status, 2, 1);
        }
    }

    // This module sits textually after the `assert_eq!`/`assert_ne!` macro
    // definitions above, so the bare names resolve to this crate's own
    // macros, not `core`'s — `::core::assert_eq!` disambiguates explicitly.

    #[test]
    fn passing_assertions_leave_status_success() {
        let mut status = StatusInfo::new();
        let mut ctx = TestContext::new();
        passes(&mut status, &mut ctx);
        ::core::assert_eq!(status.outcome(), Outcome::Success);
    }

    #[test]
    fn failing_assertion_records_expected_and_got() {
        let mut status = StatusInfo::new();
        let mut ctx = TestContext::new();
        fails_with_diagnostic(&mut status, &mut ctx);
        ::core::assert_eq!(status.outcome(), Outcome::Fail);
        let diagnostic = status.diagnostic().expect("diagnostic present");
        ::core::assert!(diagnostic.contains("Expected: 2"));
        ::core::assert!(diagnostic.contains("Got: 1"));
        ::core::assert!(diagnostic.contains("assertions.rs"));
    }

    #[test]
    fn skip_short_circuits_before_later_assertions() {
        let mut status = StatusInfo::new();
        let mut ctx = TestContext::new();
        skips_before_failing(&mut status, &mut ctx);
        ::core::assert_eq!(status.outcome(), Outcome::Skip);
    }
}
