// src/watch/event_handler.rs

//! Conversion of raw `notify` events into reactor-level changes.

use std::path::Path;

use notify::event::ModifyKind;
use notify::{Event, EventKind};
use tracing::{trace, warn};

use crate::types::FileChangeEvent;
use crate::watch::path_utils::relative_str;

/// Whether `kind` counts as a modification.
///
/// Content and metadata changes count. Renames are reported by `notify` as
/// `Modify(Name(..))` but are moves, not modifications, so they are skipped
/// along with creates, removes and accesses.
pub fn is_modification(kind: &EventKind) -> bool {
    match kind {
        EventKind::Modify(ModifyKind::Name(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    }
}

/// Turn one `notify` event into zero or more [`FileChangeEvent`]s.
///
/// Each path is made relative to `root` (forward slashes) and probed for
/// being a directory. Paths that cannot be related to `root` are dropped
/// with a warning.
pub fn change_events(root: &Path, event: &Event) -> Vec<FileChangeEvent> {
    if !is_modification(&event.kind) {
        trace!(kind = ?event.kind, "skipping non-modification event");
        return Vec::new();
    }

    event
        .paths
        .iter()
        .filter_map(|path| {
            let Some(rel) = relative_str(root, path) else {
                warn!("could not relativize path {:?} against root {:?}", path, root);
                return None;
            };
            Some(FileChangeEvent {
                path: rel,
                is_directory: path.is_dir(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, RenameMode};
    use std::fs;

    fn modify_data() -> EventKind {
        EventKind::Modify(ModifyKind::Data(DataChange::Content))
    }

    #[test]
    fn only_non_rename_modifications_count() {
        assert!(is_modification(&modify_data()));
        assert!(is_modification(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::WriteTime
        ))));
        assert!(is_modification(&EventKind::Modify(ModifyKind::Any)));
        assert!(!is_modification(&EventKind::Modify(ModifyKind::Name(
            RenameMode::Both
        ))));
        assert!(!is_modification(&EventKind::Create(CreateKind::File)));
        assert!(!is_modification(&EventKind::Any));
    }

    #[test]
    fn file_modification_becomes_relative_change() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/main.zig"), "pub fn main() void {}\n").unwrap();

        let event = Event::new(modify_data()).add_path(root.join("src/main.zig"));
        assert_eq!(
            change_events(&root, &event),
            vec![FileChangeEvent::file("src/main.zig")]
        );
    }

    #[test]
    fn directory_is_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("src")).unwrap();

        let event = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(root.join("src"));
        assert_eq!(
            change_events(&root, &event),
            vec![FileChangeEvent::directory("src")]
        );
    }

    #[test]
    fn create_events_produce_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(root.join("new.zig"));
        assert!(change_events(&root, &event).is_empty());
    }

    #[test]
    fn foreign_paths_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let event = Event::new(modify_data()).add_path("/definitely/not/under/root.zig".into());
        assert!(change_events(&root, &event).is_empty());
    }
}
