// src/watch/path_utils.rs

use std::path::{Component, Path};

/// Express `path` relative to `root` as a forward-slash string.
///
/// Tries a plain `strip_prefix` first. If that fails or leaves `..` behind
/// (symlinked roots, `/var` vs `/private/var` on macOS) the parent directory
/// of `path` is canonicalized and the file name re-attached, which also works
/// for files that no longer exist by the time the event is processed.
///
/// `root` is expected to be canonical already. Returns `None` for paths
/// outside the root.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        if rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return Some(to_slash(rel));
        }
    }

    let parent = path.parent()?.canonicalize().ok()?;
    let resolved = match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    };
    resolved.strip_prefix(root).ok().map(to_slash)
}

fn to_slash(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
