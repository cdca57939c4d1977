/*!
 * Memory Types
 * Common types for memory stack frames
 */

use crate::core::types::{Pid, Size};
use crate::process::ProcessInfo;
use serde::{Deserialize, Serialize};

/// One allocation record in the memory stack.
///
/// References a process by PID; a process may hold any number of frames.
/// The name is copied at push time so snapshots can render without registry
/// access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StackFrame {
    pub pid: Pid,
    pub name: String,
    pub size: Size,
}

impl StackFrame {
    pub(super) fn new(process: &ProcessInfo, size: Size) -> Self {
        Self {
            pid: process.pid,
            name: process.name.clone(),
            size,
        }
    }
}
