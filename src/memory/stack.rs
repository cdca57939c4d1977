/*!
 * Memory Stack
 * LIFO allocation frames with full-depth per-process cleanup
 */

use super::types::StackFrame;
use crate::core::errors::{KernelError, Result};
use crate::core::types::{Pid, Size};
use crate::process::ProcessInfo;
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;

/// LIFO collection of allocation frames.
///
/// The most recently pushed frame is the top. Frames reference registry
/// records by PID only; the stack never mutates any other structure.
/// `remove_all_by_pid` exists for cascade delete and scans the whole stack,
/// not just a contiguous run at the top.
pub struct MemoryStack {
    // Top of stack is the end of the Vec
    frames: Arc<RwLock<Vec<StackFrame>>>,
}

impl MemoryStack {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Push an allocation frame for a process
    ///
    /// Fails with `InvalidArgument` for a zero size. Duplicate PIDs are
    /// valid: a process may allocate repeatedly.
    pub fn push(&self, process: &ProcessInfo, size: Size) -> Result<()> {
        if size == 0 {
            return Err(KernelError::InvalidArgument(
                "allocation size must be a positive integer".into(),
            ));
        }

        self.frames.write().push(StackFrame::new(process, size));
        info!("Allocated {} KB for PID {}", size, process.pid);
        Ok(())
    }

    /// Remove and return the top frame
    ///
    /// Fails with `EmptyStack` if no frame is allocated.
    pub fn pop(&self) -> Result<StackFrame> {
        let frame = self.frames.write().pop().ok_or(KernelError::EmptyStack)?;
        info!("Freed top frame: {} KB from PID {}", frame.size, frame.pid);
        Ok(frame)
    }

    /// Remove every frame referencing a PID, at any depth
    ///
    /// Preserves the relative order of all remaining frames and returns the
    /// number removed (possibly zero). Used by cascade delete; a plain pop
    /// loop would stop at the first surviving frame and leave stale
    /// references beneath it.
    pub fn remove_all_by_pid(&self, pid: Pid) -> usize {
        let mut frames = self.frames.write();
        let before = frames.len();
        frames.retain(|f| f.pid != pid);
        let removed = before - frames.len();

        if removed > 0 {
            info!("Freed {} frame(s) belonging to PID {}", removed, pid);
        }
        removed
    }

    /// Top-to-bottom snapshot (read-only)
    pub fn snapshot(&self) -> Vec<StackFrame> {
        self.frames.read().iter().rev().cloned().collect()
    }

    /// Sum of frame sizes held by a PID
    pub fn process_total(&self, pid: Pid) -> Size {
        self.frames
            .read()
            .iter()
            .filter(|f| f.pid == pid)
            .map(|f| f.size)
            .sum()
    }

    /// Sum of all frame sizes
    pub fn total_allocated(&self) -> Size {
        self.frames.read().iter().map(|f| f.size).sum()
    }

    pub fn len(&self) -> usize {
        self.frames.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.read().is_empty()
    }
}

impl Clone for MemoryStack {
    fn clone(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
        }
    }
}

impl Default for MemoryStack {
    fn default() -> Self {
        Self::new()
    }
}
