//! The `parser-fixtures` command-line interface.
//!
//! Parses arguments, wires the default S-expression pipeline and line differ
//! into a [`Harness`], and turns the outcome into a process exit code.

use std::ffi::OsString;

use termcolor::StandardStream;

use crate::cli::args::FixtureArgs;
use crate::diff::LineDiffer;
use crate::harness::Harness;
use crate::report::Reporter;
use crate::syntax::SexprPipeline;
use clap::Parser;

pub mod args;

/// Entry point used by the binary.
pub fn run() -> i32 {
    run_with(std::env::args_os())
}

/// Runs the CLI with explicit arguments (the first one is the program name)
/// and returns the exit code: 0 on success or help, 1 otherwise.
pub fn run_with<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match FixtureArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            if err.print().is_err() {
                eprintln!("{err}");
            }
            return if err.use_stderr() { 1 } else { 0 };
        }
    };

    let config = args.into_config();
    let mut reporter = Reporter::new(
        StandardStream::stdout(config.color.choice()),
        config.root_label(),
    );
    let harness = Harness::new(config, SexprPipeline::default, LineDiffer::default());

    match harness.run(&mut reporter) {
        Ok(summary) => summary.exit_code(),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            1
        }
    }
}
