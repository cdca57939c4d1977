/*!
 * Process Registry
 * Insertion-ordered table that owns every process record
 */

use super::types::{ProcessInfo, ProcessState};
use crate::core::errors::{KernelError, Result};
use crate::core::types::{Pid, Priority};
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;

/// Source of truth for process existence and identity.
///
/// The registry owns every `ProcessInfo` exclusively; other structures hold
/// PIDs, never records. Insertion order is preserved for listing. It never
/// touches the ready queue or the memory stack — cascade cleanup belongs to
/// the `ProcessManager`.
pub struct ProcessRegistry {
    table: Arc<RwLock<Vec<ProcessInfo>>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a process record
    ///
    /// Fails with `InvalidArgument` for a zero PID or priority or an empty
    /// name, and with `DuplicateId` if the PID is already live.
    pub fn create(&self, pid: Pid, name: String, priority: Priority) -> Result<ProcessInfo> {
        if pid == 0 {
            return Err(KernelError::InvalidArgument(
                "pid must be a positive integer".into(),
            ));
        }
        if name.is_empty() {
            return Err(KernelError::InvalidArgument(
                "process name must be non-empty".into(),
            ));
        }
        if priority == 0 {
            return Err(KernelError::InvalidArgument(
                "priority must be a positive integer".into(),
            ));
        }

        let mut table = self.table.write();
        if table.iter().any(|p| p.pid == pid) {
            return Err(KernelError::DuplicateId(pid));
        }

        let process = ProcessInfo::new(pid, name, priority);
        table.push(process.clone());

        info!(
            "Created process: {} (PID: {}, priority: {})",
            process.name, pid, priority
        );
        Ok(process)
    }

    /// Look up a process by PID (read-only, no side effect)
    pub fn find(&self, pid: Pid) -> Option<ProcessInfo> {
        self.table.read().iter().find(|p| p.pid == pid).cloned()
    }

    /// Unlink a process record and return ownership of it
    ///
    /// Fails with `NotFound` if the PID is not live. Leaves every other
    /// structure untouched.
    pub fn remove(&self, pid: Pid) -> Result<ProcessInfo> {
        let mut table = self.table.write();
        let pos = table
            .iter()
            .position(|p| p.pid == pid)
            .ok_or(KernelError::NotFound(pid))?;

        let process = table.remove(pos);
        info!("Removed process from registry: PID {}", pid);
        Ok(process)
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> Vec<ProcessInfo> {
        self.table.read().clone()
    }

    /// Check whether a PID is live
    pub fn contains(&self, pid: Pid) -> bool {
        self.table.read().iter().any(|p| p.pid == pid)
    }

    /// Update the advisory state of a live process
    ///
    /// Returns whether the PID was found. Never gates anything.
    pub fn set_state(&self, pid: Pid, state: ProcessState) -> bool {
        let mut table = self.table.write();
        match table.iter_mut().find(|p| p.pid == pid) {
            Some(process) => {
                process.state = state;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

impl Clone for ProcessRegistry {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find() {
        let registry = ProcessRegistry::new();
        registry.create(1, "init".to_string(), 5).unwrap();

        let found = registry.find(1).unwrap();
        assert_eq!(found.name, "init");
        assert_eq!(found.state, ProcessState::Created);
        assert!(registry.find(2).is_none());
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let registry = ProcessRegistry::new();
        registry.create(1, "a".to_string(), 1).unwrap();

        let err = registry.create(1, "b".to_string(), 2).unwrap_err();
        assert_eq!(err, KernelError::DuplicateId(1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let registry = ProcessRegistry::new();

        assert!(matches!(
            registry.create(0, "a".to_string(), 1),
            Err(KernelError::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.create(1, String::new(), 1),
            Err(KernelError::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.create(1, "a".to_string(), 0),
            Err(KernelError::InvalidArgument(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_returns_record() {
        let registry = ProcessRegistry::new();
        registry.create(3, "worker".to_string(), 2).unwrap();

        let removed = registry.remove(3).unwrap();
        assert_eq!(removed.pid, 3);
        assert!(registry.find(3).is_none());
        assert_eq!(registry.remove(3).unwrap_err(), KernelError::NotFound(3));
    }

    #[test]
    fn test_pid_reuse_after_removal() {
        let registry = ProcessRegistry::new();
        registry.create(1, "first".to_string(), 1).unwrap();
        registry.remove(1).unwrap();

        let reused = registry.create(1, "second".to_string(), 9).unwrap();
        assert_eq!(reused.name, "second");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = ProcessRegistry::new();
        registry.create(5, "e".to_string(), 1).unwrap();
        registry.create(2, "b".to_string(), 3).unwrap();
        registry.create(9, "i".to_string(), 2).unwrap();

        let pids: Vec<_> = registry.list().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![5, 2, 9]);
    }
}
