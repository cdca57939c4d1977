/*!
 * Mini-OS Kernel Library
 * Process lifecycle simulation: registry, priority scheduler, memory stack
 */

pub mod core;
pub mod memory;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{KernelError, Result};
pub use crate::core::types::{Pid, Priority, Size};
pub use memory::{MemoryStack, StackFrame};
pub use process::{ProcessInfo, ProcessManager, ProcessRegistry, ProcessState, TerminationSummary};
pub use scheduler::{QueueEntry, ReadyQueue};
