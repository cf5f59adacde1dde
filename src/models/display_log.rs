use std::fs;
use std::path::Path;

use crate::core::errors::Result;

/// Append-only log of rendered lines backing the output panel.
///
/// The log belongs to the presentation side and is mutated only through
/// `&mut`, so single-writer access is enforced by the borrow checker rather
/// than a lock. Background workers send line values over a channel; they
/// never hold a reference to the log.
#[derive(Debug, Default)]
pub struct DisplayLog {
    lines: Vec<String>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the log. Called once at the start of each run, before that
    /// run's first append.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the current contents to `path`, one line per row.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(path, text)?;
        Ok(())
    }
}
