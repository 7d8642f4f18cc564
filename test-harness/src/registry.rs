// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide registry of tests, populated before the supervisor runs.
//!
//! Rust has no pre-main constructor attribute, so registration is done via
//! [`inventory`]: the `#[test_harness_macros::test]` attribute expands each
//! annotated function into an `inventory::submit!` of a [`RegisteredTest`].
//! `Registry::collect` drains those submissions once, at supervisor start —
//! this is the Rust realization of `register_test`/
//! `__attribute__((constructor))` in the harness this crate is modeled on.

use indexmap::IndexMap;

use crate::context::TestContext;
use crate::outcome::StatusInfo;

pub type TestBody = fn(&mut StatusInfo, &mut TestContext);
// Setup/teardown take StatusInfo too, not just the context slot: this is a
// deliberate generalization over the harness this crate is modeled on (see
// DESIGN.md) so that `skip_test!` inside setup is actually expressible.
pub type SetupFn = fn(&mut StatusInfo, &mut TestContext);
pub type TeardownFn = fn(&mut StatusInfo, &mut TestContext);

/// One test as submitted by the `#[test_harness_macros::test]` macro.
///
/// Collected via `inventory`; authors never construct this directly.
pub struct RegisteredTest {
    pub suite: &'static str,
    pub name: &'static str,
    pub body: TestBody,
    pub setup: Option<SetupFn>,
    pub teardown: Option<TeardownFn>,
}

inventory::collect!(RegisteredTest);

/// A single test, as held by the registry (R1: suite and name are always
/// non-empty, enforced at `Registry::collect` time).
#[derive(Clone, Copy)]
pub struct Test {
    pub suite: &'static str,
    pub name: &'static str,
    pub body: TestBody,
    pub setup: Option<SetupFn>,
    pub teardown: Option<TeardownFn>,
}

/// Ordered sequence of tests within one suite (insertion order = the order
/// `inventory` submissions were registered in).
pub type TestsVec = Vec<Test>;

/// Mapping from suite name to its `TestsVec`, plus the two monotone
/// counters the reporter uses for column alignment.
///
/// An `IndexMap` is used rather than a `HashMap`/`BTreeMap` because suite
/// order must be stable within a run but is not required to be
/// lexicographic — insertion (first-registration) order is the simplest
/// order that satisfies both.
pub struct Registry {
    suites: IndexMap<&'static str, TestsVec>,
    total_count: usize,
    max_name_len: usize,
}

impl Registry {
    /// Builds the registry from every `RegisteredTest` submitted via
    /// `inventory` anywhere in the linked binary. Duplicate `(suite, name)`
    /// pairs are preserved, not rejected — both run, in registration order.
    pub fn collect() -> Self {
        Self::from_registered(inventory::iter::<RegisteredTest>.into_iter())
    }

    fn from_registered<'a>(registered: impl Iterator<Item = &'a RegisteredTest>) -> Self {
        let mut suites: IndexMap<&'static str, TestsVec> = IndexMap::new();
        let mut total_count = 0;
        let mut max_name_len = 0;

        for registered in registered {
            debug_assert!(!registered.suite.is_empty(), "suite name must be non-empty");
            debug_assert!(!registered.name.is_empty(), "test name must be non-empty");

            max_name_len = max_name_len.max(registered.suite.len()).max(registered.name.len());

            suites.entry(registered.suite).or_default().push(Test {
                suite: registered.suite,
                name: registered.name,
                body: registered.body,
                setup: registered.setup,
                teardown: registered.teardown,
            });
            total_count += 1;
        }

        Self {
            suites,
            total_count,
            max_name_len,
        }
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Iterates suites in registration order, then tests within each suite
    /// in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Test])> {
        self.suites.iter().map(|(suite, tests)| (*suite, tests.as_slice()))
    }
}
