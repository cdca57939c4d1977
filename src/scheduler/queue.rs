/*!
 * Ready Queue
 * Priority-ordered admission queue with stable tie-breaking
 */

use super::entry::QueueEntry;
use crate::core::errors::{KernelError, Result};
use crate::core::types::Pid;
use crate::process::ProcessInfo;
use dashmap::DashMap;
use log::info;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

/// Priority-ordered ready queue.
///
/// Entries are kept in ascending priority order (lower value dequeues
/// first); among equal priorities, arrival order is preserved. A PID holds
/// at most one entry at a time. The queue references registry records by
/// PID only and never mutates any other structure.
pub struct ReadyQueue {
    queue: Arc<RwLock<VecDeque<QueueEntry>>>,
    // O(1) membership index, kept in sync under the queue's write lock
    members: Arc<DashMap<Pid, ()>>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(RwLock::new(VecDeque::new())),
            members: Arc::new(DashMap::new()),
        }
    }

    /// Admit a process to the queue
    ///
    /// Fails with `AlreadyQueued` if the PID already holds an entry.
    /// Insertion scans from the front and places the entry before the first
    /// existing entry whose priority is strictly greater, appending when no
    /// such entry exists. This yields ascending priority with ties broken
    /// by arrival order.
    pub fn enqueue(&self, process: &ProcessInfo) -> Result<()> {
        let mut queue = self.queue.write();
        if self.members.contains_key(&process.pid) {
            return Err(KernelError::AlreadyQueued(process.pid));
        }

        let entry = QueueEntry::new(process);
        let pos = queue
            .iter()
            .position(|e| e.priority > entry.priority)
            .unwrap_or(queue.len());
        queue.insert(pos, entry);
        self.members.insert(process.pid, ());

        info!(
            "Process {} enqueued at position {} (priority: {})",
            process.pid, pos, process.priority
        );
        Ok(())
    }

    /// Remove and return the front entry
    ///
    /// Fails with `EmptyQueue` if no process is admitted. This is the only
    /// way execution begins.
    pub fn dequeue_front(&self) -> Result<QueueEntry> {
        let mut queue = self.queue.write();
        let entry = queue.pop_front().ok_or(KernelError::EmptyQueue)?;
        self.members.remove(&entry.pid);

        info!(
            "Process {} dequeued for execution (priority: {})",
            entry.pid, entry.priority
        );
        Ok(entry)
    }

    /// Remove the entry for a PID if present
    ///
    /// Idempotent; returns whether a removal occurred. Absence is a normal
    /// outcome during cascade delete.
    pub fn remove_by_pid(&self, pid: Pid) -> bool {
        let mut queue = self.queue.write();
        if self.members.remove(&pid).is_none() {
            return false;
        }

        // The index said the pid is present; the scan must find it
        match queue.iter().position(|e| e.pid == pid) {
            Some(pos) => {
                queue.remove(pos);
                info!("Process {} removed from ready queue", pid);
                true
            }
            None => false,
        }
    }

    /// Front-to-back snapshot (read-only)
    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.queue.read().iter().cloned().collect()
    }

    /// Check whether a PID holds an entry
    pub fn contains(&self, pid: Pid) -> bool {
        self.members.contains_key(&pid)
    }

    pub fn len(&self) -> usize {
        self.queue.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.read().is_empty()
    }
}

impl Clone for ReadyQueue {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            members: Arc::clone(&self.members),
        }
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
