//! Harness error handling.
//!
//! Only structural and environment problems are errors. A fixture that no
//! longer matches is a regression, which is a normal [`Outcome`] and never
//! surfaces through this type.
//!
//! [`Outcome`]: crate::fixture::Outcome

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Every way a run can be aborted before all cases are reported.
#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("No tests found in {}", root.display())]
    #[diagnostic(
        code(parser_fixtures::discovery::empty),
        help("test cases are files matching `**/<name>.<extension>` whose name does not start with `_`")
    )]
    NoTestsFound { root: PathBuf },

    #[error("No matching tests: {}", requested.join(" "))]
    #[diagnostic(
        code(parser_fixtures::discovery::no_match),
        help("name cases by their path relative to the test root, without the extension")
    )]
    NoMatchingTests { requested: Vec<String> },

    #[error("Test root {} is not a directory", root.display())]
    #[diagnostic(
        code(parser_fixtures::discovery::root),
        help("pass the directory holding the test sources with `--root <DIR>`")
    )]
    RootNotDirectory { root: PathBuf },

    #[error("Failed to walk test root {}", root.display())]
    #[diagnostic(code(parser_fixtures::discovery::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read test source {}", path.display())]
    #[diagnostic(code(parser_fixtures::io::source))]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read fixture {}", path.display())]
    #[diagnostic(code(parser_fixtures::io::fixture_read))]
    ReadFixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write fixture {}", path.display())]
    #[diagnostic(code(parser_fixtures::io::fixture_write))]
    WriteFixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report output")]
    #[diagnostic(code(parser_fixtures::io::output))]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matching_tests_names_every_request() {
        let err = HarnessError::NoMatchingTests {
            requested: vec!["lists/nested".into(), "strings".into()],
        };
        assert_eq!(err.to_string(), "No matching tests: lists/nested strings");
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let err = HarnessError::NoTestsFound {
            root: PathBuf::from("tests/parser"),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("parser_fixtures::discovery::empty"));
    }
}
