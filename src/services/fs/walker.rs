use std::fs::{self, ReadDir};
use std::path::PathBuf;

use tracing::warn;

use crate::models::entry::{PathEntry, PathKind, WalkEvent};

/// Lazy pre-order walk over a directory tree.
///
/// Each visited path yields its entry before anything beneath it; children
/// are yielded in whatever order the platform listing returns them. A
/// directory whose listing fails yields its entry followed by a read error,
/// and the walk moves on to its siblings.
///
/// Open directories live on an explicit frame stack, so tree depth is bounded
/// by the heap rather than the call stack. Symlinks are reported as files and
/// never followed, which keeps the walk finite on link cycles.
pub struct Walk {
    root: Option<PathBuf>,
    queued: Option<WalkEvent>,
    stack: Vec<Frame>,
}

struct Frame {
    path: PathBuf,
    entries: ReadDir,
}

impl Walk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            queued: None,
            stack: Vec::new(),
        }
    }

    fn visit_root(&mut self, root: PathBuf) -> WalkEvent {
        let meta = match fs::symlink_metadata(&root) {
            Ok(meta) => meta,
            Err(err) => {
                warn!(path = %root.display(), %err, "cannot stat walk root");
                return WalkEvent::RootError {
                    message: err.to_string(),
                };
            }
        };
        if !meta.is_dir() {
            return WalkEvent::Entry(PathEntry::new(root, PathKind::File));
        }
        match fs::read_dir(&root) {
            Ok(entries) => self.stack.push(Frame {
                path: root.clone(),
                entries,
            }),
            Err(err) => {
                // A root that exists but cannot be listed ends the whole run,
                // after its own entry has gone out.
                warn!(path = %root.display(), %err, "cannot list walk root");
                self.queued = Some(WalkEvent::RootError {
                    message: err.to_string(),
                });
            }
        }
        WalkEvent::Entry(PathEntry::new(root, PathKind::Dir))
    }

    fn visit(&mut self, path: PathBuf, is_dir: bool) -> WalkEvent {
        if !is_dir {
            return WalkEvent::Entry(PathEntry::new(path, PathKind::File));
        }
        match fs::read_dir(&path) {
            Ok(entries) => self.stack.push(Frame {
                path: path.clone(),
                entries,
            }),
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot list directory");
                self.queued = Some(WalkEvent::ReadDirError {
                    path: path.clone(),
                    message: err.to_string(),
                });
            }
        }
        WalkEvent::Entry(PathEntry::new(path, PathKind::Dir))
    }
}

impl Iterator for Walk {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        if let Some(event) = self.queued.take() {
            return Some(event);
        }
        if let Some(root) = self.root.take() {
            return Some(self.visit_root(root));
        }
        loop {
            let frame = self.stack.last_mut()?;
            match frame.entries.next() {
                Some(Ok(entry)) => {
                    // DirEntry::file_type does not follow symlinks, so a link
                    // to a directory comes back as not-a-dir and is emitted
                    // as a file without descending.
                    let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                    return Some(self.visit(entry.path(), is_dir));
                }
                Some(Err(err)) => {
                    let path = frame.path.clone();
                    self.stack.pop();
                    warn!(path = %path.display(), %err, "directory listing failed mid-stream");
                    return Some(WalkEvent::ReadDirError {
                        path,
                        message: err.to_string(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Eager variant of [`Walk`] for callers that want the whole sequence.
pub fn walk_collect(root: impl Into<PathBuf>) -> Vec<WalkEvent> {
    Walk::new(root).collect()
}
