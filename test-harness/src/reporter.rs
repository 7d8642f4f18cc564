// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Buffered, colored text reporter. Generalized from the teacher's
//! termcolor-based reporter to this harness's five-outcome model, and
//! trimmed to the one output format the design calls for: a human-readable
//! log with per-suite dotted lines and a final summary. No JUnit emission.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use crate::cli::ColorMode;
use crate::outcome::Outcome;

/// One counter per outcome tag; P3 requires these to sum to the total.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub success: usize,
    pub fail: usize,
    pub skip: usize,
    pub timeout: usize,
    pub crashed: usize,
}

impl RunStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Skip => self.skip += 1,
            Outcome::Timeout => self.timeout += 1,
            Outcome::Crashed => self.crashed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.fail + self.skip + self.timeout + self.crashed
    }

    /// P4: exit code is 0 iff Fail = Crashed = Timeout = 0.
    pub fn failed_run(&self) -> bool {
        self.fail > 0 || self.crashed > 0 || self.timeout > 0
    }
}

pub struct Reporter {
    stdout: BufferWriter,
    width: usize,
}

impl Reporter {
    pub fn new(color: ColorMode, width: usize) -> Self {
        let choice = match color {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        };
        Self {
            stdout: BufferWriter::stdout(choice),
            width: width.max(20),
        }
    }

    pub fn run_started(&self, total: usize, suite_count: usize) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        buffer.set_color(&Self::bold_spec())?;
        write!(buffer, "{:>12} ", "Running")?;
        buffer.reset()?;
        buffer.set_color(&Self::count_spec())?;
        write!(buffer, "{total}")?;
        buffer.reset()?;
        write!(buffer, " tests across ")?;
        buffer.set_color(&Self::count_spec())?;
        write!(buffer, "{suite_count}")?;
        buffer.reset()?;
        writeln!(buffer, " suites")?;
        self.stdout.print(&buffer)
    }

    pub fn suite_started(&self, suite: &str) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        buffer.set_color(&Self::bold_spec())?;
        writeln!(buffer, "\n{suite}")?;
        buffer.reset()?;
        self.stdout.print(&buffer)
    }

    pub fn test_result(
        &self,
        name: &str,
        outcome: Outcome,
        elapsed: Duration,
        diagnostic: Option<&str>,
    ) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();

        write!(buffer, "  {name} ")?;
        let used = 2 + name.len() + 1;
        let dots = self.width.saturating_sub(used + outcome.label().len() + 1).max(1);
        buffer.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(buffer, "{}", ".".repeat(dots))?;
        buffer.reset()?;
        write!(buffer, " ")?;

        buffer.set_color(&Self::outcome_spec(outcome))?;
        write!(buffer, "{}", outcome.label())?;
        buffer.reset()?;
        writeln!(buffer, " [{:>8.3}s]", elapsed.as_secs_f64())?;

        if let Some(diagnostic) = diagnostic.filter(|d| !d.is_empty()) {
            buffer.set_color(&Self::fail_spec())?;
            writeln!(buffer, "    Details:")?;
            buffer.reset()?;
            for line in diagnostic.lines() {
                writeln!(buffer, "      {line}")?;
            }
        }

        self.stdout.print(&buffer)
    }

    pub fn summary(&self, stats: &RunStats, elapsed: Duration) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        writeln!(buffer, "\n{}", "-".repeat(self.width))?;

        let summary_spec = if stats.failed_run() {
            Self::fail_spec()
        } else {
            Self::pass_spec()
        };
        buffer.set_color(&summary_spec)?;
        write!(buffer, "{:>12} ", "Summary")?;
        buffer.reset()?;
        write!(buffer, "[{:>8.3}s] ", elapsed.as_secs_f64())?;

        buffer.set_color(&Self::count_spec())?;
        write!(buffer, "{}", stats.total())?;
        buffer.reset()?;
        write!(buffer, " tests run: ")?;

        buffer.set_color(&Self::count_spec())?;
        write!(buffer, "{}", stats.success)?;
        buffer.set_color(&Self::pass_spec())?;
        write!(buffer, " passed")?;
        buffer.reset()?;

        if stats.fail > 0 {
            write!(buffer, ", ")?;
            buffer.set_color(&Self::count_spec())?;
            write!(buffer, "{}", stats.fail)?;
            buffer.set_color(&Self::fail_spec())?;
            write!(buffer, " failed")?;
            buffer.reset()?;
        }
        if stats.crashed > 0 {
            write!(buffer, ", ")?;
            buffer.set_color(&Self::count_spec())?;
            write!(buffer, "{}", stats.crashed)?;
            buffer.set_color(&Self::fail_spec())?;
            write!(buffer, " crashed")?;
            buffer.reset()?;
        }
        if stats.timeout > 0 {
            write!(buffer, ", ")?;
            buffer.set_color(&Self::count_spec())?;
            write!(buffer, "{}", stats.timeout)?;
            buffer.set_color(&Self::fail_spec())?;
            write!(buffer, " timed out")?;
            buffer.reset()?;
        }

        write!(buffer, ", ")?;
        buffer.set_color(&Self::count_spec())?;
        write!(buffer, "{}", stats.skip)?;
        buffer.set_color(&Self::skip_spec())?;
        write!(buffer, " skipped")?;
        buffer.reset()?;
        writeln!(buffer)?;

        self.stdout.print(&buffer)
    }

    fn bold_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    fn count_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    fn pass_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    fn fail_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    fn skip_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    fn outcome_spec(outcome: Outcome) -> ColorSpec {
        match outcome {
            Outcome::Success => Self::pass_spec(),
            Outcome::Skip => Self::skip_spec(),
            Outcome::Fail | Outcome::Timeout | Outcome::Crashed => Self::fail_spec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_stats_tally_and_total() {
        let mut stats = RunStats::default();
        stats.record(Outcome::Success);
        stats.record(Outcome::Success);
        stats.record(Outcome::Fail);
        stats.record(Outcome::Skip);
        stats.record(Outcome::Timeout);
        stats.record(Outcome::Crashed);
        assert_eq!(stats.total(), 6);
        assert!(stats.failed_run());
    }

    #[test]
    fn run_stats_clean_run_does_not_fail() {
        let mut stats = RunStats::default();
        stats.record(Outcome::Success);
        stats.record(Outcome::Skip);
        assert!(!stats.failed_run());
    }
}
