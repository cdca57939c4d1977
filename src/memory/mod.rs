/*!
 * Memory Module
 * Stack-based allocation tracking per process
 */

mod stack;
mod types;

pub use stack::MemoryStack;
pub use types::StackFrame;
