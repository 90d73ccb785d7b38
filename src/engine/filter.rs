// src/engine/filter.rs

//! Pure filtering predicate deciding whether a change is worth a rebuild.
//!
//! No IO, no caching: each event is judged on its own against the
//! configuration, with the rules applied in a fixed order.

use crate::config::ReactorConfig;
use crate::types::FileChangeEvent;

/// Why an event was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    Directory,
    SuffixMismatch,
    /// Path contains this ignored substring.
    IgnoredPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Qualifying,
    Ignored(IgnoreReason),
}

impl Verdict {
    pub fn is_qualifying(&self) -> bool {
        matches!(self, Verdict::Qualifying)
    }
}

/// Apply the filter rules in order, short-circuiting on the first match:
/// 1. directories are ignored,
/// 2. paths not ending in the configured suffix are ignored,
/// 3. paths containing any ignored substring are ignored.
pub fn classify(config: &ReactorConfig, event: &FileChangeEvent) -> Verdict {
    if event.is_directory {
        return Verdict::Ignored(IgnoreReason::Directory);
    }

    if !event.path.ends_with(config.file_suffix()) {
        return Verdict::Ignored(IgnoreReason::SuffixMismatch);
    }

    if let Some(hit) = config
        .ignored_path_substrings()
        .iter()
        .find(|s| event.path.contains(s.as_str()))
    {
        return Verdict::Ignored(IgnoreReason::IgnoredPath(hit.clone()));
    }

    Verdict::Qualifying
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawReactorConfig;

    fn default_config() -> ReactorConfig {
        ReactorConfig::try_from(RawReactorConfig::default()).unwrap()
    }

    #[test]
    fn source_file_qualifies() {
        let cfg = default_config();
        assert_eq!(
            classify(&cfg, &FileChangeEvent::file("src/main.zig")),
            Verdict::Qualifying
        );
    }

    #[test]
    fn directory_is_ignored_even_with_matching_suffix() {
        let cfg = default_config();
        assert_eq!(
            classify(&cfg, &FileChangeEvent::directory("src/weird.zig")),
            Verdict::Ignored(IgnoreReason::Directory)
        );
    }

    #[test]
    fn other_extensions_are_ignored() {
        let cfg = default_config();
        for path in ["build.zig.zon", "README.md", "src/main.zig~", "src/main.zi"] {
            assert_eq!(
                classify(&cfg, &FileChangeEvent::file(path)),
                Verdict::Ignored(IgnoreReason::SuffixMismatch),
                "{path}"
            );
        }
    }

    #[test]
    fn cache_and_output_dirs_are_ignored() {
        let cfg = default_config();
        assert_eq!(
            classify(&cfg, &FileChangeEvent::file(".zig-cache/tmp.zig")),
            Verdict::Ignored(IgnoreReason::IgnoredPath(".zig-cache".into()))
        );
        assert_eq!(
            classify(&cfg, &FileChangeEvent::file("zig-out/gen/bindings.zig")),
            Verdict::Ignored(IgnoreReason::IgnoredPath("zig-out".into()))
        );
    }

    #[test]
    fn suffix_is_checked_before_ignored_substrings() {
        let cfg = default_config();
        assert_eq!(
            classify(&cfg, &FileChangeEvent::file(".zig-cache/h/abc.o")),
            Verdict::Ignored(IgnoreReason::SuffixMismatch)
        );
    }

    #[test]
    fn build_script_qualifies() {
        let cfg = default_config();
        assert!(classify(&cfg, &FileChangeEvent::file("build.zig")).is_qualifying());
    }
}
