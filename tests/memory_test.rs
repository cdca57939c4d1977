/*!
 * Memory Stack Tests
 * LIFO ordering, allocation validation, and per-process accounting
 */

use mini_os_kernel::{KernelError, ProcessManager};
use pretty_assertions::assert_eq;

#[test]
fn test_push_pop_lifo_order() {
    let manager = ProcessManager::new();
    manager.create_process(1, "a".to_string(), 1).unwrap();
    manager.create_process(2, "b".to_string(), 2).unwrap();

    manager.allocate(1, 10).unwrap();
    manager.allocate(2, 20).unwrap();
    manager.allocate(1, 30).unwrap();

    assert_eq!(manager.deallocate_top().unwrap().size, 30);
    assert_eq!(manager.deallocate_top().unwrap().size, 20);
    assert_eq!(manager.deallocate_top().unwrap().size, 10);
}

#[test]
fn test_pop_empty_stack() {
    let manager = ProcessManager::new();
    assert_eq!(
        manager.deallocate_top().unwrap_err(),
        KernelError::EmptyStack
    );
}

#[test]
fn test_allocate_unknown_pid() {
    let manager = ProcessManager::new();
    assert_eq!(
        manager.allocate(42, 16).unwrap_err(),
        KernelError::NotFound(42)
    );
    assert!(manager.memory_snapshot().is_empty());
}

#[test]
fn test_allocate_zero_size_rejected() {
    let manager = ProcessManager::new();
    manager.create_process(1, "app".to_string(), 1).unwrap();

    assert!(matches!(
        manager.allocate(1, 0),
        Err(KernelError::InvalidArgument(_))
    ));
    assert!(manager.memory_snapshot().is_empty());
}

#[test]
fn test_repeated_allocations_per_process() {
    let manager = ProcessManager::new();
    manager.create_process(1, "app".to_string(), 1).unwrap();

    manager.allocate(1, 8).unwrap();
    manager.allocate(1, 8).unwrap();
    manager.allocate(1, 8).unwrap();

    assert_eq!(manager.memory_snapshot().len(), 3);
    assert_eq!(manager.memory().process_total(1), 24);
}

#[test]
fn test_remove_all_by_pid_leaves_survivors_in_order() {
    let manager = ProcessManager::new();
    manager.create_process(1, "p1".to_string(), 1).unwrap();
    manager.create_process(2, "p2".to_string(), 2).unwrap();

    // Stack top-to-bottom after pushes: (p1, 10), (p2, 20), (p1, 30)
    manager.allocate(1, 30).unwrap();
    manager.allocate(2, 20).unwrap();
    manager.allocate(1, 10).unwrap();

    let removed = manager.memory().remove_all_by_pid(1);
    assert_eq!(removed, 2);

    let snapshot = manager.memory_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].pid, 2);
    assert_eq!(snapshot[0].size, 20);
}

#[test]
fn test_snapshot_top_to_bottom_with_names() {
    let manager = ProcessManager::new();
    manager.create_process(1, "editor".to_string(), 1).unwrap();
    manager.allocate(1, 64).unwrap();
    manager.allocate(1, 32).unwrap();

    let snapshot = manager.memory_snapshot();
    assert_eq!(snapshot[0].size, 32);
    assert_eq!(snapshot[1].size, 64);
    assert_eq!(snapshot[0].name, "editor");
}

#[test]
fn test_total_allocated() {
    let manager = ProcessManager::new();
    manager.create_process(1, "a".to_string(), 1).unwrap();
    manager.create_process(2, "b".to_string(), 1).unwrap();

    manager.allocate(1, 100).unwrap();
    manager.allocate(2, 50).unwrap();
    assert_eq!(manager.memory().total_allocated(), 150);

    manager.deallocate_top().unwrap();
    assert_eq!(manager.memory().total_allocated(), 100);
}
