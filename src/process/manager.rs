/*!
 * Process Management
 * Orchestrates the registry, ready queue, and memory stack as one unit
 */

use super::registry::ProcessRegistry;
use super::types::{ProcessInfo, ProcessState, TerminationSummary};
use crate::core::errors::{KernelError, Result};
use crate::core::types::{Pid, Priority, Size};
use crate::memory::{MemoryStack, StackFrame};
use crate::scheduler::{QueueEntry, ReadyQueue};
use log::info;

/// Lifecycle orchestrator.
///
/// The only component permitted to mutate more than one structure per
/// operation. It validates cross-structure invariants and delegates
/// single-structure mutations, so that at every observable point each PID
/// referenced by the ready queue or the memory stack is live in the
/// registry. Individual structures never touch each other.
pub struct ProcessManager {
    registry: ProcessRegistry,
    scheduler: ReadyQueue,
    memory: MemoryStack,
}

impl ProcessManager {
    pub fn new() -> Self {
        info!("Process manager initialized");
        Self {
            registry: ProcessRegistry::new(),
            scheduler: ReadyQueue::new(),
            memory: MemoryStack::new(),
        }
    }

    /// Create a process record
    ///
    /// On success the process exists in the registry and is referenced by
    /// neither the queue nor the stack.
    pub fn create_process(&self, pid: Pid, name: String, priority: Priority) -> Result<ProcessInfo> {
        self.registry.create(pid, name, priority)
    }

    /// Delete a process and purge every reference to it
    ///
    /// Fails with `NotFound` before mutating anything. On success the queue
    /// entry (if any), every stack frame for the PID, and the registry
    /// record are removed as a single logical unit, and the summary reports
    /// what was purged. No path reports success while a stale reference
    /// remains.
    pub fn delete_process(&self, pid: Pid) -> Result<TerminationSummary> {
        if !self.registry.contains(pid) {
            return Err(KernelError::NotFound(pid));
        }

        let bytes_freed = self.memory.process_total(pid);
        let queue_entries_removed = usize::from(self.scheduler.remove_by_pid(pid));
        let frames_freed = self.memory.remove_all_by_pid(pid);

        let mut process = self.registry.remove(pid)?;
        process.state = ProcessState::Terminated;

        info!(
            "Terminated process {} ({}): purged {} queue entry(ies), {} frame(s), {} KB",
            pid, process.name, queue_entries_removed, frames_freed, bytes_freed
        );

        Ok(TerminationSummary {
            pid,
            queue_entries_removed,
            frames_freed,
            bytes_freed,
        })
    }

    /// List all live processes in insertion order
    pub fn list_processes(&self) -> Vec<ProcessInfo> {
        self.registry.list()
    }

    /// Admit a live process to the ready queue
    ///
    /// Fails with `NotFound` for an unknown PID and `AlreadyQueued` if the
    /// PID already holds an entry.
    pub fn schedule_process(&self, pid: Pid) -> Result<()> {
        let process = self.registry.find(pid).ok_or(KernelError::NotFound(pid))?;
        self.scheduler.enqueue(&process)?;
        self.registry.set_state(pid, ProcessState::Queued);
        Ok(())
    }

    /// Dequeue the most urgent process and mark it executing
    ///
    /// The returned process stays in the registry; only its queue membership
    /// ends. Execution is a single atomic state transition, not a timed
    /// simulation.
    pub fn run_next(&self) -> Result<ProcessInfo> {
        let entry = self.scheduler.dequeue_front()?;
        self.registry.set_state(entry.pid, ProcessState::Executing);
        self.registry
            .find(entry.pid)
            .ok_or(KernelError::NotFound(entry.pid))
    }

    /// Push an allocation frame for a live process
    pub fn allocate(&self, pid: Pid, size: Size) -> Result<()> {
        let process = self.registry.find(pid).ok_or(KernelError::NotFound(pid))?;
        self.memory.push(&process, size)?;
        self.registry.set_state(pid, ProcessState::Allocated);
        Ok(())
    }

    /// Free the top allocation frame
    pub fn deallocate_top(&self) -> Result<StackFrame> {
        self.memory.pop()
    }

    /// Front-to-back view of the ready queue
    pub fn queue_snapshot(&self) -> Vec<QueueEntry> {
        self.scheduler.snapshot()
    }

    /// Top-to-bottom view of the memory stack
    pub fn memory_snapshot(&self) -> Vec<StackFrame> {
        self.memory.snapshot()
    }

    /// Get registry reference
    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// Get ready queue reference
    pub fn scheduler(&self) -> &ReadyQueue {
        &self.scheduler
    }

    /// Get memory stack reference
    pub fn memory(&self) -> &MemoryStack {
        &self.memory
    }
}

impl Clone for ProcessManager {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            scheduler: self.scheduler.clone(),
            memory: self.memory.clone(),
        }
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}
