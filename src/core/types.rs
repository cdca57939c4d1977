/*!
 * Core Types
 * Common types used across the kernel
 */

/// Process ID type
///
/// Zero is never a valid PID; creation rejects it with `InvalidArgument`.
/// A PID is unique in the registry while the process is live. Reuse after
/// deletion is permitted.
pub type Pid = u32;

/// Priority level
///
/// Lower value = more urgent (1 is the most urgent). Zero is invalid.
pub type Priority = u32;

/// Size type for memory allocations (KB)
pub type Size = usize;
