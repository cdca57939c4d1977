/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified kernel error type with miette diagnostics
///
/// Every failure of the command contract is one of these kinds. Errors are
/// returned as values, never used for control flow, and never fatal: after
/// any error all structures remain valid.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum KernelError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(kernel::invalid_argument),
        help("PIDs, priorities, and sizes must be positive; names must be non-empty.")
    )]
    InvalidArgument(String),

    #[error("Process {0} already exists")]
    #[diagnostic(
        code(kernel::duplicate_id),
        help("A live process already holds this PID. PIDs may be reused only after deletion.")
    )]
    DuplicateId(Pid),

    #[error("Process {0} not found")]
    #[diagnostic(
        code(kernel::not_found),
        help("The process may have been deleted or never existed. Check PID validity.")
    )]
    NotFound(Pid),

    #[error("Process {0} is already in the ready queue")]
    #[diagnostic(
        code(kernel::already_queued),
        help("A PID may hold at most one ready-queue entry at a time.")
    )]
    AlreadyQueued(Pid),

    #[error("Ready queue is empty")]
    #[diagnostic(
        code(kernel::empty_queue),
        help("Schedule a process before dequeuing.")
    )]
    EmptyQueue,

    #[error("Memory stack is empty")]
    #[diagnostic(
        code(kernel::empty_stack),
        help("Allocate memory before freeing the top frame.")
    )]
    EmptyStack,
}

/// Result type for kernel operations
///
/// # Must Use
/// Kernel operations can fail and must be handled to keep structures consistent
pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization_roundtrip() {
        let error = KernelError::NotFound(123);
        let json = serde_json::to_string(&error).unwrap();
        let deserialized: KernelError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = KernelError::InvalidArgument("priority must be positive".into());
        assert_eq!(
            error.to_string(),
            "Invalid argument: priority must be positive"
        );
    }

    #[test]
    fn test_unit_variant_serialization() {
        let error = KernelError::EmptyQueue;
        let json = serde_json::to_string(&error).unwrap();
        let deserialized: KernelError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_duplicate_id_display() {
        let error = KernelError::DuplicateId(7);
        assert_eq!(error.to_string(), "Process 7 already exists");
    }
}
