use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathKind {
    File,
    Dir,
}

/// A single path discovered by the walk. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub path: PathBuf,
    pub kind: PathKind,
}

impl PathEntry {
    pub fn new(path: PathBuf, kind: PathKind) -> Self {
        Self { path, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Dir
    }
}

/// What a walk run produces: entries in discovery order, interleaved with
/// the failures hit along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WalkEvent {
    Entry(PathEntry),
    /// Listing a subdirectory's children failed; traversal of that subtree
    /// stops, siblings are unaffected.
    ReadDirError { path: PathBuf, message: String },
    /// The walk could not start (or continue) at the root itself. Terminal.
    RootError { message: String },
}

impl WalkEvent {
    /// Render the event as the single line shown in the output panel.
    pub fn to_line(&self) -> String {
        match self {
            WalkEvent::Entry(entry) => match entry.kind {
                PathKind::Dir => format!("DIR: {}/", entry.path.display()),
                PathKind::File => format!("FILE: {}", entry.path.display()),
            },
            WalkEvent::ReadDirError { path, message } => {
                format!("Error accessing {}: {}", path.display(), message)
            }
            WalkEvent::RootError { message } => {
                format!("Error listing directory: {}", message)
            }
        }
    }
}
