/*!
 * Core Module
 * Shared types and error handling
 */

pub mod errors;
pub mod types;

pub use errors::{KernelError, Result};
pub use types::{Pid, Priority, Size};
