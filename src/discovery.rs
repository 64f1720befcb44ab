//! Test discovery: finds case sources under the test root and applies an
//! explicit selection.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{HarnessError, Result};

/// Infix that marks a committed fixture: `<case>.fixture.<ext>`.
pub const FIXTURE_INFIX: &str = "fixture";

/// One discovered case. Immutable once discovery has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Path relative to the root, `/`-separated, extension stripped.
    pub id: String,
    /// Path relative to the root, `/`-separated, extension kept.
    pub file_name: String,
    pub source: PathBuf,
    pub fixture: PathBuf,
}

impl TestCase {
    /// Fixture file name relative to the root, as shown in diff labels.
    pub fn fixture_name(&self) -> String {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        format!("{}.{FIXTURE_INFIX}.{extension}", self.id)
    }
}

/// Returns true for names that look like case sources with `extension`.
///
/// Names starting with `_` are private helpers and never cases, dot-files
/// are hidden; files already carrying the fixture infix are baselines, not
/// inputs.
pub fn is_case_file(name: &str, extension: &str) -> bool {
    let suffix = format!(".{extension}");
    let fixture_suffix = format!(".{FIXTURE_INFIX}.{extension}");
    !name.starts_with('_')
        && !name.starts_with('.')
        && name.len() > suffix.len()
        && name.ends_with(&suffix)
        && !name.ends_with(&fixture_suffix)
}

/// Walks `root` and returns every case in deterministic (sorted by file
/// name, depth-first) order. Symlinked sources are followed.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<TestCase>> {
    if root.is_file() {
        return Err(HarnessError::RootNotDirectory {
            root: root.to_path_buf(),
        });
    }
    let mut cases = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| HarnessError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_case_file(name, extension) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if let Some(case) = case_from_paths(entry.path(), relative, name, extension) {
            cases.push(case);
        }
    }
    Ok(cases)
}

fn case_from_paths(
    path: &Path,
    relative: &Path,
    name: &str,
    extension: &str,
) -> Option<TestCase> {
    let suffix = format!(".{extension}");
    let file_name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let id = file_name.strip_suffix(&suffix)?.to_string();
    let stem = name.strip_suffix(&suffix)?;
    if id.is_empty() || stem.is_empty() {
        return None;
    }
    Some(TestCase {
        id,
        fixture: path.with_file_name(format!("{stem}.{FIXTURE_INFIX}.{extension}")),
        file_name,
        source: path.to_path_buf(),
    })
}

/// Narrows `cases` to the explicitly requested identities, keeping
/// discovery order. An empty selection keeps everything; a non-empty
/// selection that matches nothing is a configuration error.
pub fn select(cases: Vec<TestCase>, selection: &[String]) -> Result<Vec<TestCase>> {
    if selection.is_empty() {
        return Ok(cases);
    }
    let selected: Vec<_> = cases
        .into_iter()
        .filter(|case| selection.iter().any(|wanted| *wanted == case.id))
        .collect();
    if selected.is_empty() {
        return Err(HarnessError::NoMatchingTests {
            requested: selection.to_vec(),
        });
    }
    Ok(selected)
}
