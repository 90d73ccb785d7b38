// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `zigwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zigwatch",
    version,
    about = "Reformat changed Zig files and rebuild the project on every save.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch recursively. Tools run with this as working
    /// directory.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: String,

    /// Zig executable used for `fmt` and `build run`.
    #[arg(long, value_name = "PROGRAM", default_value = "zig")]
    pub zig: String,

    /// Additional path substring to ignore (repeatable).
    ///
    /// `.zig-cache` and `zig-out` are always ignored.
    #[arg(long, value_name = "SUBSTRING")]
    pub ignore: Vec<String>,

    /// Kill a tool that runs longer than this many seconds.
    ///
    /// Without it a hung tool blocks all later change events.
    #[arg(long, value_name = "SECS")]
    pub tool_timeout: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ZIGWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_watch_current_dir_with_zig() {
        let args = CliArgs::try_parse_from(["zigwatch"]).unwrap();
        assert_eq!(args.root, ".");
        assert_eq!(args.zig, "zig");
        assert!(args.ignore.is_empty());
        assert!(args.tool_timeout.is_none());
    }

    #[test]
    fn ignore_is_repeatable() {
        let args = CliArgs::try_parse_from([
            "zigwatch", "--ignore", "vendor", "--ignore", "tmp", "--tool-timeout", "30",
        ])
        .unwrap();
        assert_eq!(args.ignore, vec!["vendor", "tmp"]);
        assert_eq!(args.tool_timeout, Some(30));
    }
}
