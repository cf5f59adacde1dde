use std::path::PathBuf;
use std::thread;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::models::entry::WalkEvent;
use crate::services::fs::walker::Walk;

/// Start one listing run on a dedicated worker thread.
///
/// The worker does the blocking filesystem walk and sends each event over
/// the returned channel in emission order, so channel delivery order equals
/// pre-order discovery order. The worker owns no presentation state; the
/// consumer appends rendered lines to its own log as events arrive.
/// Dropping the receiver ends the run early.
pub fn spawn_walk(root: impl Into<PathBuf>) -> UnboundedReceiver<WalkEvent> {
    let root = root.into();
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        info!(root = %root.display(), "listing run started");
        let mut sent = 0usize;
        for event in Walk::new(&root) {
            if tx.send(event).is_err() {
                debug!(root = %root.display(), "receiver dropped, stopping walk");
                return;
            }
            sent += 1;
        }
        info!(root = %root.display(), events = sent, "listing run finished");
    });

    rx
}
