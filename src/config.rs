//! Run configuration.
//!
//! The option set is closed, so it is a plain struct rather than a generic
//! option map. The CLI builds one from its arguments; tests build them
//! directly.

use std::path::PathBuf;

use termcolor::ColorChoice;

/// Default test root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "tests/parser";

/// Default source extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "sexp";

/// Whether fixtures are regenerated or checked. Global and exclusive per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite every fixture with the freshly produced output.
    Create,
    /// Compare the produced output against the committed fixture.
    #[default]
    Verify,
}

impl Mode {
    pub fn from_create_flag(create: bool) -> Self {
        if create {
            Mode::Create
        } else {
            Mode::Verify
        }
    }
}

/// When the reporter emits ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Everything a run needs to know before discovery starts.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub root: PathBuf,
    pub extension: String,
    pub mode: Mode,
    /// Explicitly requested case identities. Empty means "all".
    pub selection: Vec<String>,
    pub color: ColorMode,
}

impl HarnessConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_selection<I, S>(mut self, selection: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = selection.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Label used in report headers: the last component of the root.
    pub fn root_label(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            mode: Mode::default(),
            selection: Vec::new(),
            color: ColorMode::default(),
        }
    }
}
