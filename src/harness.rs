//! Run orchestration.
//!
//! A run moves through `Discovering -> Running(case)* -> Reporting`. Every
//! case is discovered before the first one runs, runs exactly once in
//! discovery order, and gets a pipeline instance of its own.

use termcolor::WriteColor;

use crate::config::HarnessConfig;
use crate::discovery::{self, TestCase};
use crate::errors::{HarnessError, Result};
use crate::fixture::{self, RunResult};
use crate::pipeline::{Differ, Pipeline};
use crate::report::{Reporter, RunSummary};
use crate::runner;

/// Drives one pipeline/differ pair over a test root.
pub struct Harness<F, D> {
    config: HarnessConfig,
    make_pipeline: F,
    differ: D,
}

impl<F, P, D> Harness<F, D>
where
    F: Fn() -> P,
    P: Pipeline,
    D: Differ,
{
    pub fn new(config: HarnessConfig, make_pipeline: F, differ: D) -> Self {
        Self {
            config,
            make_pipeline,
            differ,
        }
    }

    /// Discovery plus selection. Fails when nothing is left to run.
    pub fn cases(&self) -> Result<Vec<TestCase>> {
        let cases = discovery::discover(&self.config.root, &self.config.extension)?;
        if cases.is_empty() {
            return Err(HarnessError::NoTestsFound {
                root: self.config.root.clone(),
            });
        }
        discovery::select(cases, &self.config.selection)
    }

    /// Runs and settles a single case with a fresh pipeline.
    pub fn run_case(&self, case: &TestCase) -> Result<RunResult> {
        let mut pipeline = (self.make_pipeline)();
        let actual = runner::run_case(case, &mut pipeline)?;
        fixture::settle(
            case,
            actual,
            self.config.mode,
            &self.differ,
            &self.config.root_label(),
        )
    }

    /// Runs every selected case, reporting as it goes.
    ///
    /// Regressions are counted in the returned summary; only structural
    /// problems (nothing to run, unreadable inputs) come back as errors.
    pub fn run<W: WriteColor>(&self, reporter: &mut Reporter<W>) -> Result<RunSummary> {
        let cases = self.cases()?;
        let mut summary = RunSummary::default();
        for case in &cases {
            reporter.case_started(case)?;
            let result = self.run_case(case)?;
            reporter.case_finished(&result)?;
            summary.record(&result);
        }
        reporter.finished(&summary)?;
        Ok(summary)
    }
}
