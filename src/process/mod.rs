/*!
 * Process Module
 * Registry, lifecycle orchestration, and process types
 */

pub mod manager;
pub mod registry;
pub mod types;

pub use manager::ProcessManager;
pub use registry::ProcessRegistry;
pub use types::{ProcessInfo, ProcessState, TerminationSummary};
