/*!
 * Process Types
 * Common types for process management
 */

use crate::core::types::{Pid, Priority, Size};
use serde::{Deserialize, Serialize};

/// Process state
///
/// Advisory only: the kernel records transitions for display but never gates
/// an operation on the current state. An `Executing` process may be
/// re-enqueued; a `Queued` process may allocate memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process exists in the registry but is referenced nowhere else
    Created,
    /// Process holds an entry in the ready queue
    Queued,
    /// Process most recently pushed a memory stack frame
    Allocated,
    /// Process was dequeued for execution
    Executing,
    /// Process has been deleted from the registry
    Terminated,
}

/// Process metadata
///
/// Owned exclusively by the registry; the ready queue and memory stack refer
/// to a process by PID only and receive clones for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: Pid,
    pub name: String,
    pub priority: Priority,
    pub state: ProcessState,
}

impl ProcessInfo {
    #[must_use]
    pub fn new(pid: Pid, name: String, priority: Priority) -> Self {
        Self {
            pid,
            name,
            priority,
            state: ProcessState::Created,
        }
    }

    /// Check if process was dequeued for execution
    #[inline]
    #[must_use]
    pub const fn is_executing(&self) -> bool {
        matches!(self.state, ProcessState::Executing)
    }

    /// Check if process has been deleted
    #[inline]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }
}

/// Outcome of a cascade delete
///
/// Reports how many references the delete purged from each structure so the
/// caller can render the cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationSummary {
    pub pid: Pid,
    /// Ready-queue entries removed (0 or 1; a PID queues at most once)
    pub queue_entries_removed: usize,
    /// Memory stack frames removed, at any depth
    pub frames_freed: usize,
    /// Total size of the freed frames
    pub bytes_freed: Size,
}
