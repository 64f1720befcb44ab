//! Collaborator seams.
//!
//! The harness never knows which language it is exercising. It drives a
//! [`Pipeline`] to turn source text into canonical text and asks a
//! [`Differ`] whether that text still matches the fixture. Both are traits
//! so harness logic can be tested with scripted fakes.

use std::fmt;

/// How bad a parser finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        f.write_str(label)
    }
}

/// A message produced while parsing one case.
///
/// Rendered on a single line so it can be appended to a fixture as a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub filename: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, counted in chars.
    pub column: usize,
}

impl Diagnostic {
    pub fn error(
        message: impl Into<String>,
        filename: impl Into<String>,
        (line, column): (usize, usize),
    ) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            filename: filename.into(),
            line,
            column,
        }
    }

    pub fn warning(
        message: impl Into<String>,
        filename: impl Into<String>,
        position: (usize, usize),
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(message, filename, position)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Newlines inside a message would break the one-comment-per-line rule.
        let message = self.message.replace(['\r', '\n'], " ");
        write!(
            f,
            "{}: {} in {}({},{})",
            self.severity, message, self.filename, self.line, self.column
        )
    }
}

/// Result of parsing: the program plus everything the parser complained about.
#[derive(Debug, Clone)]
pub struct Parsed<P> {
    pub program: P,
    pub diagnostics: Vec<Diagnostic>,
}

/// The parser/printer under test.
///
/// The harness builds a fresh instance for every case, so implementations
/// may keep per-parse state without leaking it into other cases.
pub trait Pipeline {
    type Program;

    /// Parse `source`, tagged with `filename` for diagnostics. Never fails:
    /// problems are reported as diagnostics.
    fn parse(&mut self, source: &str, filename: &str) -> Parsed<Self::Program>;

    /// Re-emit a parsed program as canonical source text.
    fn serialize(&self, program: &Self::Program) -> String;

    /// Marker that starts a single-line comment in the target language.
    fn line_comment(&self) -> &str {
        "//"
    }
}

/// Compares expected and actual text.
pub trait Differ {
    /// `None` when equivalent, otherwise a human-readable rendering of the
    /// differing regions. `label` names the fixture being compared.
    fn diff(&self, label: &str, expected: &str, actual: &str) -> Option<String>;
}

impl<D: Differ + ?Sized> Differ for &D {
    fn diff(&self, label: &str, expected: &str, actual: &str) -> Option<String> {
        (**self).diff(label, expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_renders_on_one_line() {
        let diag = Diagnostic::error("unclosed list\nopened here", "lists.sexp", (3, 7));
        assert_eq!(
            diag.to_string(),
            "ERROR: unclosed list opened here in lists.sexp(3,7)"
        );
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }
}
