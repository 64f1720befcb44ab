//! Golden-file regression harness for parser/printer pipelines.
//!
//! Each test source under the root is parsed, re-printed in canonical form
//! and followed by one comment line per parser diagnostic. In create mode
//! that text becomes the case's `<case>.fixture.<ext>` file; otherwise it is
//! diffed against the committed fixture and mismatches fail the run.
//!
//! ```rust,no_run
//! use parser_fixtures::{Harness, HarnessConfig, LineDiffer, Reporter, SexprPipeline};
//! use termcolor::{ColorChoice, StandardStream};
//!
//! let config = HarnessConfig::new("tests/parser");
//! let mut reporter = Reporter::new(StandardStream::stdout(ColorChoice::Auto), config.root_label());
//! let harness = Harness::new(config, SexprPipeline::default, LineDiffer::default());
//! let summary = harness.run(&mut reporter).expect("test root is readable");
//! std::process::exit(summary.exit_code());
//! ```

pub mod cli;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod errors;
pub mod fixture;
pub mod harness;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod syntax;

pub use config::{ColorMode, HarnessConfig, Mode};
pub use diff::LineDiffer;
pub use discovery::TestCase;
pub use errors::{HarnessError, Result};
pub use fixture::{Failure, Outcome, RunResult};
pub use harness::Harness;
pub use pipeline::{Diagnostic, Differ, Parsed, Pipeline, Severity};
pub use report::{Reporter, RunSummary};
pub use syntax::SexprPipeline;
