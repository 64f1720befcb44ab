//! Console reporting and the run-wide failure tally.

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::discovery::TestCase;
use crate::errors::Result;
use crate::fixture::{Failure, Outcome, RunResult};

/// Aggregate over all cases of one run. Lives only as long as the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub created: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &RunResult) {
        self.total += 1;
        match result.outcome {
            Outcome::Created => self.created += 1,
            Outcome::Pass => self.passed += 1,
            Outcome::Fail(_) => self.failed += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: the only machine-readable result of a run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl<'a> FromIterator<&'a RunResult> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a RunResult>>(iter: I) -> Self {
        let mut summary = RunSummary::default();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}

/// Writes per-case status and the final verdict to any colour-aware sink.
pub struct Reporter<W> {
    out: W,
    label_root: String,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, label_root: impl Into<String>) -> Self {
        Self {
            out,
            label_root: label_root.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn case_started(&mut self, case: &TestCase) -> Result<()> {
        let header = format!("Testing {}/{}", self.label_root, case.file_name);
        self.line(Some(Color::White), &header)
    }

    pub fn case_finished(&mut self, result: &RunResult) -> Result<()> {
        match &result.outcome {
            Outcome::Created => self.line(None, "Created")?,
            Outcome::Pass => self.line(Some(Color::Green), "diff OK")?,
            Outcome::Fail(Failure::Diff(rendering)) => {
                self.diff(rendering)?;
                self.line(Some(Color::Red), "diff ERROR")?;
            }
            Outcome::Fail(Failure::MissingFixture(path)) => {
                let message = format!(
                    "missing fixture {} (rerun with --create to generate it)",
                    path.display()
                );
                self.line(None, &message)?;
                self.line(Some(Color::Red), "diff ERROR")?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn finished(&mut self, summary: &RunSummary) -> Result<()> {
        if summary.is_success() {
            write!(self.out, "[ ")?;
            self.paint(Some(Color::White), "SUCCESS")?;
            writeln!(self.out, " ]")?;
        } else {
            self.paint(Some(Color::Red), "ERROR: ")?;
            writeln!(self.out, "{} fixture tests failed", summary.failed)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn diff(&mut self, rendering: &str) -> Result<()> {
        for (index, line) in rendering.lines().enumerate() {
            // The first two lines name the compared files.
            let color = if index < 2 && (line.starts_with("---") || line.starts_with("+++")) {
                Some(Color::White)
            } else if line.starts_with('+') {
                Some(Color::Green)
            } else if line.starts_with('-') {
                Some(Color::Red)
            } else if line.starts_with("@@") {
                Some(Color::Cyan)
            } else {
                None
            };
            self.line(color, line)?;
        }
        Ok(())
    }

    fn line(&mut self, color: Option<Color>, text: &str) -> Result<()> {
        self.paint(color, text)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn paint(&mut self, color: Option<Color>, text: &str) -> Result<()> {
        if color.is_some() {
            self.out.set_color(ColorSpec::new().set_fg(color))?;
        }
        write!(self.out, "{text}")?;
        if color.is_some() {
            self.out.reset()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::path::PathBuf;
    use termcolor::Buffer;

    fn result(outcome: Outcome) -> RunResult {
        RunResult {
            case: "forms".into(),
            mode: Mode::Verify,
            actual: String::new(),
            outcome,
        }
    }

    fn case() -> TestCase {
        TestCase {
            id: "lists/nested".into(),
            file_name: "lists/nested.sexp".into(),
            source: PathBuf::from("tests/parser/lists/nested.sexp"),
            fixture: PathBuf::from("tests/parser/lists/nested.fixture.sexp"),
        }
    }

    fn text(reporter: Reporter<Buffer>) -> String {
        String::from_utf8(reporter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn summary_counts_failures() {
        let results = [
            result(Outcome::Pass),
            result(Outcome::Fail(Failure::Diff("-a\n+b".into()))),
            result(Outcome::Fail(Failure::MissingFixture("x".into()))),
            result(Outcome::Created),
        ];
        let summary: RunSummary = results.iter().collect();
        assert_eq!(
            summary,
            RunSummary {
                total: 4,
                created: 1,
                passed: 1,
                failed: 2
            }
        );
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(RunSummary::default().exit_code(), 0);
    }

    #[test]
    fn case_block_layout() {
        let mut reporter = Reporter::new(Buffer::no_color(), "parser");
        reporter.case_started(&case()).unwrap();
        reporter.case_finished(&result(Outcome::Pass)).unwrap();
        assert_eq!(text(reporter), "Testing parser/lists/nested.sexp\ndiff OK\n\n");
    }

    #[test]
    fn failure_prints_diff_before_status() {
        let mut reporter = Reporter::new(Buffer::no_color(), "parser");
        reporter
            .case_finished(&result(Outcome::Fail(Failure::Diff("-(a)\n+(b)".into()))))
            .unwrap();
        assert_eq!(text(reporter), "-(a)\n+(b)\ndiff ERROR\n\n");
    }

    #[test]
    fn only_leading_lines_are_headers() {
        let rendering = "--- expected f\n+++ actual f\n--- old\n+++ new";
        let mut reporter = Reporter::new(Buffer::ansi(), "parser");
        reporter
            .case_finished(&result(Outcome::Fail(Failure::Diff(rendering.into()))))
            .unwrap();
        let out = text(reporter);
        let mut white = ColorSpec::new();
        white.set_fg(Some(Color::White));
        let mut red = ColorSpec::new();
        red.set_fg(Some(Color::Red));
        let mut green = ColorSpec::new();
        green.set_fg(Some(Color::Green));

        let painted = |spec: &ColorSpec, text: &str| {
            let mut buf = Buffer::ansi();
            buf.set_color(spec).unwrap();
            write!(buf, "{text}").unwrap();
            buf.reset().unwrap();
            String::from_utf8(buf.into_inner()).unwrap()
        };
        assert!(out.contains(&painted(&white, "--- expected f")));
        assert!(out.contains(&painted(&white, "+++ actual f")));
        assert!(out.contains(&painted(&red, "--- old")));
        assert!(out.contains(&painted(&green, "+++ new")));
    }

    #[test]
    fn created_status() {
        let mut reporter = Reporter::new(Buffer::no_color(), "parser");
        reporter.case_finished(&result(Outcome::Created)).unwrap();
        assert_eq!(text(reporter), "Created\n\n");
    }

    #[test]
    fn final_banners() {
        let mut reporter = Reporter::new(Buffer::no_color(), "parser");
        reporter.finished(&RunSummary::default()).unwrap();
        assert_eq!(text(reporter), "[ SUCCESS ]\n");

        let mut reporter = Reporter::new(Buffer::no_color(), "parser");
        let summary = RunSummary {
            total: 3,
            failed: 2,
            ..RunSummary::default()
        };
        reporter.finished(&summary).unwrap();
        assert_eq!(text(reporter), "ERROR: 2 fixture tests failed\n");
    }

    #[test]
    fn colour_sink_receives_escape_codes() {
        let mut reporter = Reporter::new(Buffer::ansi(), "parser");
        reporter.case_finished(&result(Outcome::Pass)).unwrap();
        let out = text(reporter);
        assert!(out.contains("diff OK"));
        assert!(out.contains('\x1b'));
    }
}
