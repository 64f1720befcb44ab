//! Command-line arguments.
//!
//! Uses `clap` derive so the recognised option set stays closed and typed.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ColorMode, HarnessConfig, Mode, DEFAULT_EXTENSION, DEFAULT_ROOT};

/// Round-trips every test source through the parser/printer and compares
/// the result against its committed fixture.
#[derive(Debug, Parser)]
#[command(
    name = "parser-fixtures",
    version,
    override_usage = "parser-fixtures [test1 test2 ...] [options]"
)]
pub struct FixtureArgs {
    /// Run only these tests, named by path relative to the root without extension.
    pub tests: Vec<String>,

    /// Recreates the fixture for the specified test(s) or all the fixtures if no specific test is given.
    #[arg(long)]
    pub create: bool,

    /// Directory holding the test sources.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Extension of test sources, without the dot.
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// When to colour the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl FixtureArgs {
    pub fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            root: self.root,
            extension: self.extension,
            mode: Mode::from_create_flag(self.create),
            selection: self.tests,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        FixtureArgs::command().debug_assert();
    }

    #[test]
    fn positional_names_and_create_flag() {
        let args =
            FixtureArgs::try_parse_from(["parser-fixtures", "lists/nested", "--create", "atoms"])
                .unwrap();
        let config = args.into_config();
        assert_eq!(config.mode, Mode::Create);
        assert_eq!(config.selection, ["lists/nested", "atoms"]);
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn defaults_verify_everything() {
        let config = FixtureArgs::try_parse_from(["parser-fixtures"])
            .unwrap()
            .into_config();
        assert_eq!(config.mode, Mode::Verify);
        assert!(config.selection.is_empty());
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = FixtureArgs::try_parse_from(["parser-fixtures", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}
