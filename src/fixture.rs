//! Fixture manager: writes baselines in create mode, compares against them
//! in verify mode. A run never reads and writes the same fixture.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::Mode;
use crate::discovery::TestCase;
use crate::errors::{HarnessError, Result};
use crate::pipeline::Differ;
use crate::runner::normalize_line_endings;

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Output no longer matches the fixture; carries the rendered diff.
    Diff(String),
    /// Verify mode found no fixture to compare against.
    MissingFixture(PathBuf),
}

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }
}

/// Everything the reporter needs about one finished case.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub case: String,
    pub mode: Mode,
    pub actual: String,
    pub outcome: Outcome,
}

/// Persists or checks `actual` for `case` according to `mode`.
///
/// `label_root` prefixes the fixture name in diff headers.
pub fn settle<D: Differ>(
    case: &TestCase,
    actual: String,
    mode: Mode,
    differ: &D,
    label_root: &str,
) -> Result<RunResult> {
    let outcome = match mode {
        Mode::Create => {
            create(case, &actual)?;
            Outcome::Created
        }
        Mode::Verify => verify(case, &actual, differ, label_root)?,
    };
    Ok(RunResult {
        case: case.id.clone(),
        mode,
        actual,
        outcome,
    })
}

/// Writes `actual` verbatim, replacing any previous fixture.
pub fn create(case: &TestCase, actual: &str) -> Result<()> {
    fs::write(&case.fixture, actual).map_err(|source| HarnessError::WriteFixture {
        path: case.fixture.clone(),
        source,
    })
}

/// Compares `actual` against the committed fixture.
///
/// A missing fixture is a failure of this case only. Any other read error
/// aborts the run.
pub fn verify<D: Differ>(
    case: &TestCase,
    actual: &str,
    differ: &D,
    label_root: &str,
) -> Result<Outcome> {
    let expected = match fs::read_to_string(&case.fixture) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(Outcome::Fail(Failure::MissingFixture(case.fixture.clone())));
        }
        Err(source) => {
            return Err(HarnessError::ReadFixture {
                path: case.fixture.clone(),
                source,
            })
        }
    };
    let expected = normalize_line_endings(&expected);
    let actual = normalize_line_endings(actual);
    let label = format!("{label_root}/{}", case.fixture_name());
    Ok(match differ.diff(&label, &expected, &actual) {
        Some(rendering) if !rendering.is_empty() => Outcome::Fail(Failure::Diff(rendering)),
        _ => Outcome::Pass,
    })
}
