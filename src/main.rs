/*!
 * Mini-OS Kernel - Main Entry Point
 *
 * Non-interactive smoke driver that exercises the full command contract:
 * - Process creation and cascade deletion
 * - Priority scheduling with stable tie-breaking
 * - Stack-based memory allocation
 */

use std::error::Error;

use log::info;
use mini_os_kernel::{KernelError, ProcessManager};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    info!("Mini-OS kernel starting...");

    let manager = ProcessManager::new();

    // Populate the registry
    manager.create_process(1, "init".to_string(), 3)?;
    manager.create_process(2, "shell".to_string(), 1)?;
    manager.create_process(3, "logger".to_string(), 2)?;
    manager.create_process(4, "backup".to_string(), 1)?;

    // Duplicate PIDs are rejected without mutating anything
    if let Err(e) = manager.create_process(1, "imposter".to_string(), 9) {
        info!("Rejected duplicate create: {}", e);
    }

    // Admit everything to the scheduler; order of equals is arrival order
    for pid in [1, 2, 3, 4] {
        manager.schedule_process(pid)?;
    }
    println!(
        "ready queue: {}",
        serde_json::to_string_pretty(&manager.queue_snapshot())?
    );

    // Allocate a few frames, including repeats for one process
    manager.allocate(1, 64)?;
    manager.allocate(2, 128)?;
    manager.allocate(1, 32)?;
    println!(
        "memory stack: {}",
        serde_json::to_string_pretty(&manager.memory_snapshot())?
    );

    // Execute the most urgent process; it stays listable afterwards
    let running = manager.run_next()?;
    info!("Executing PID {} ({})", running.pid, running.name);

    // Cascade delete: PID 1 vanishes from all three structures at once
    let summary = manager.delete_process(1)?;
    println!("delete summary: {}", serde_json::to_string_pretty(&summary)?);

    println!(
        "processes: {}",
        serde_json::to_string_pretty(&manager.list_processes())?
    );
    println!(
        "ready queue: {}",
        serde_json::to_string_pretty(&manager.queue_snapshot())?
    );
    println!(
        "memory stack: {}",
        serde_json::to_string_pretty(&manager.memory_snapshot())?
    );

    // Drain the stack and the queue to their empty-state errors
    while manager.deallocate_top().is_ok() {}
    loop {
        match manager.run_next() {
            Ok(process) => info!("Executing PID {} ({})", process.pid, process.name),
            Err(KernelError::EmptyQueue) => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!("Mini-OS kernel done");
    Ok(())
}
