/*!
 * CPU Scheduler
 * Priority-ordered ready queue modeling the admission order for execution
 */

mod entry;
mod queue;

pub use entry::QueueEntry;
pub use queue::ReadyQueue;
