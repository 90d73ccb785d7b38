// src/config/model.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::CliArgs;
use crate::types::ToolCommand;

/// Suffix of the source files we react to.
pub const DEFAULT_FILE_SUFFIX: &str = ".zig";

/// Build cache and build output directories; changes there are never ours.
pub const DEFAULT_IGNORED_SUBSTRINGS: [&str; 2] = [".zig-cache", "zig-out"];

/// Executable used for both the formatter and the builder.
pub const DEFAULT_TOOL: &str = "zig";

/// Unvalidated configuration.
///
/// Every field is public so the CLI layer and test builders can fill it in
/// freely. Convert into [`ReactorConfig`] with `ReactorConfig::try_from`.
#[derive(Debug, Clone)]
pub struct RawReactorConfig {
    pub watch_root: PathBuf,
    pub file_suffix: String,
    pub ignored_path_substrings: BTreeSet<String>,
    pub formatter: ToolCommand,
    pub builder: ToolCommand,
    pub tool_timeout: Option<Duration>,
}

impl RawReactorConfig {
    /// Defaults for a Zig project using the given executable.
    pub fn for_tool(tool: &str) -> Self {
        Self {
            watch_root: PathBuf::from("."),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            ignored_path_substrings: DEFAULT_IGNORED_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            formatter: ToolCommand::new(tool, ["fmt"]),
            builder: ToolCommand::new(tool, ["build", "run"]),
            tool_timeout: None,
        }
    }

    /// Build the raw config from parsed command-line arguments.
    ///
    /// Extra `--ignore` values are added on top of the defaults, never
    /// replacing them.
    pub fn from_args(args: &CliArgs) -> Self {
        let mut raw = Self::for_tool(&args.zig);
        raw.watch_root = PathBuf::from(&args.root);
        raw.ignored_path_substrings.extend(args.ignore.iter().cloned());
        raw.tool_timeout = args.tool_timeout.map(Duration::from_secs);
        raw
    }
}

impl Default for RawReactorConfig {
    fn default() -> Self {
        Self::for_tool(DEFAULT_TOOL)
    }
}

/// Validated, immutable reactor configuration.
///
/// Only constructible through `TryFrom<RawReactorConfig>` (see
/// [`crate::config::validate`]).
#[derive(Debug, Clone)]
pub struct ReactorConfig {
    watch_root: PathBuf,
    file_suffix: String,
    ignored_path_substrings: BTreeSet<String>,
    formatter: ToolCommand,
    builder: ToolCommand,
    tool_timeout: Option<Duration>,
}

impl ReactorConfig {
    pub(crate) fn new_unchecked(raw: RawReactorConfig) -> Self {
        Self {
            watch_root: raw.watch_root,
            file_suffix: raw.file_suffix,
            ignored_path_substrings: raw.ignored_path_substrings,
            formatter: raw.formatter,
            builder: raw.builder,
            tool_timeout: raw.tool_timeout,
        }
    }

    pub fn watch_root(&self) -> &Path {
        &self.watch_root
    }

    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }

    pub fn ignored_path_substrings(&self) -> &BTreeSet<String> {
        &self.ignored_path_substrings
    }

    pub fn formatter(&self) -> &ToolCommand {
        &self.formatter
    }

    pub fn builder(&self) -> &ToolCommand {
        &self.builder
    }

    pub fn tool_timeout(&self) -> Option<Duration> {
        self.tool_timeout
    }
}
