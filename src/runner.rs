//! Case runner: source file in, canonical text plus diagnostics out.

use std::borrow::Cow;
use std::fs;

use crate::discovery::TestCase;
use crate::errors::{HarnessError, Result};
use crate::pipeline::{Diagnostic, Pipeline};

/// Rewrites `\r\n` to `\n`. Applied to sources, fixtures and actual output
/// alike so comparisons ignore platform newline conventions.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Appends one comment line per diagnostic to the serialized program.
pub fn render_output(serialized: &str, diagnostics: &[Diagnostic], line_comment: &str) -> String {
    let mut out = String::with_capacity(serialized.len() + diagnostics.len() * 64);
    out.push_str(serialized);
    for diagnostic in diagnostics {
        out.push_str(line_comment);
        out.push(' ');
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}

/// Produces the actual output for `case` with the given pipeline instance.
///
/// An unreadable source aborts the run: it means the test root is broken.
pub fn run_case<P: Pipeline>(case: &TestCase, pipeline: &mut P) -> Result<String> {
    let raw = fs::read_to_string(&case.source).map_err(|source| HarnessError::ReadSource {
        path: case.source.clone(),
        source,
    })?;
    let text = normalize_line_endings(&raw);
    let parsed = pipeline.parse(&text, &case.file_name);
    let serialized = pipeline.serialize(&parsed.program);
    Ok(render_output(
        &serialized,
        &parsed.diagnostics,
        pipeline.line_comment(),
    ))
}
