/*!
 * Queue Entry
 * Non-owning reference to a process admitted to the ready queue
 */

use crate::core::types::{Pid, Priority};
use crate::process::ProcessInfo;
use serde::{Deserialize, Serialize};

/// One admission in the ready queue.
///
/// Identity is the PID; the name and priority are copied at enqueue time so
/// snapshots can render without registry access. The cascade delete removes
/// entries by PID, so an entry can never outlive its registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueueEntry {
    pub pid: Pid,
    pub name: String,
    pub priority: Priority,
}

impl QueueEntry {
    pub(super) fn new(process: &ProcessInfo) -> Self {
        Self {
            pid: process.pid,
            name: process.name.clone(),
            priority: process.priority,
        }
    }
}
