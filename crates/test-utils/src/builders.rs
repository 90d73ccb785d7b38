#![allow(dead_code)]

use std::path::Path;

use zigwatch::config::{RawReactorConfig, ReactorConfig};
use zigwatch::types::ToolCommand;

/// Builder for `ReactorConfig` to simplify test setup.
///
/// Starts from the production defaults (`.zig`, `.zig-cache`/`zig-out`
/// ignored, `zig fmt` / `zig build run`, root `.`).
pub struct ReactorConfigBuilder {
    config: RawReactorConfig,
}

impl ReactorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawReactorConfig::default(),
        }
    }

    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.config.watch_root = root.as_ref().to_path_buf();
        self
    }

    pub fn suffix(mut self, suffix: &str) -> Self {
        self.config.file_suffix = suffix.to_string();
        self
    }

    pub fn ignore(mut self, substring: &str) -> Self {
        self.config
            .ignored_path_substrings
            .insert(substring.to_string());
        self
    }

    pub fn no_ignores(mut self) -> Self {
        self.config.ignored_path_substrings.clear();
        self
    }

    pub fn formatter(mut self, program: &str, args: &[&str]) -> Self {
        self.config.formatter = ToolCommand::new(program, args.iter().copied());
        self
    }

    pub fn builder(mut self, program: &str, args: &[&str]) -> Self {
        self.config.builder = ToolCommand::new(program, args.iter().copied());
        self
    }

    pub fn build(self) -> ReactorConfig {
        ReactorConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ReactorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
