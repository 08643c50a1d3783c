use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

use super::*;
use crate::storage::MemoryNodeStore;

fn service() -> NodeService<MemoryNodeStore> {
    NodeService::new(Arc::new(MemoryNodeStore::new()))
}

fn sorted_titles(nodes: Vec<Node>) -> Vec<String> {
    let mut titles: Vec<_> = nodes.into_iter().map(|n| n.title).collect();
    titles.sort();
    titles
}

#[test]
fn create_assigns_sequential_ids_and_equal_timestamps() {
    let svc = service();
    let a = svc.create(NodeInput::new("t1", "d1"));
    let b = svc.create(NodeInput::new("t2", "d2"));

    assert_eq!(a.id, "1");
    assert_eq!(b.id, "2");
    assert_eq!(a.created_on, a.updated_on);
    assert_eq!(svc.get("1").unwrap(), a);
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let svc = service();
    let ids: HashSet<_> = (0..50)
        .map(|i| svc.create(NodeInput::new(format!("n{i}"), "")).id)
        .collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn update_preserves_created_on_and_advances_updated_on() {
    let svc = service();
    let created = svc.create(NodeInput::new("t1", "d1"));
    thread::sleep(std::time::Duration::from_millis(2));

    let updated = svc.update(&created.id, NodeInput::new("t1b", "")).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "t1b");
    assert_eq!(updated.description, "");
    assert_eq!(updated.created_on, created.created_on);
    assert!(updated.updated_on >= created.updated_on);
    assert_eq!(svc.get(&created.id).unwrap(), updated);
}

#[test]
fn update_and_delete_of_unknown_id_do_not_mutate() {
    let svc = service();
    let kept = svc.create(NodeInput::new("kept", ""));

    for id in ["42", "not-a-number", ""] {
        assert_eq!(
            svc.update(id, NodeInput::new("x", "y")),
            Err(NodeError::NotFound(id.to_string()))
        );
        assert_eq!(svc.delete(id), Err(NodeError::NotFound(id.to_string())));
    }

    assert_eq!(svc.list(), vec![kept]);
    // A failed update must not consume an id either
    assert_eq!(svc.create(NodeInput::new("next", "")).id, "2");
}

#[test]
fn delete_is_terminal() {
    let svc = service();
    let node = svc.create(NodeInput::new("t", "d"));

    assert_eq!(svc.delete(&node.id), Ok(()));
    assert_eq!(svc.get(&node.id), Err(NodeError::NotFound(node.id.clone())));
    assert_eq!(
        svc.update(&node.id, NodeInput::new("again", "")),
        Err(NodeError::NotFound(node.id.clone()))
    );
    assert_eq!(svc.delete(&node.id), Err(NodeError::NotFound(node.id.clone())));
    assert_eq!(svc.count(), 0);
}

#[test]
fn list_reflects_store_state() {
    let svc = service();
    assert!(svc.list().is_empty());

    let a = svc.create(NodeInput::new("A", ""));
    svc.create(NodeInput::new("B", ""));
    assert_eq!(sorted_titles(svc.list()), vec!["A", "B"]);

    svc.delete(&a.id).unwrap();
    assert_eq!(sorted_titles(svc.list()), vec!["B"]);
}

#[test]
fn deleted_ids_are_not_reissued() {
    let svc = service();
    let first = svc.create(NodeInput::new("a", ""));
    svc.delete(&first.id).unwrap();
    let second = svc.create(NodeInput::new("b", ""));
    assert_ne!(first.id, second.id);
    assert_eq!(second.id, "2");
}

#[test]
fn example_lifecycle() {
    let svc = service();
    let created = svc.create(NodeInput::new("t1", "d1"));
    assert_eq!(created.id, "1");

    let updated = svc
        .update("1", NodeInput { title: "t1b".into(), ..Default::default() })
        .unwrap();
    assert_eq!(updated.title, "t1b");
    assert_eq!(updated.description, "");
    assert_eq!(updated.created_on, created.created_on);

    assert_eq!(svc.delete("1"), Ok(()));
    assert!(matches!(svc.get("1"), Err(NodeError::NotFound(id)) if id == "1"));
}

#[test]
fn concurrent_creates_lose_no_writes() {
    let svc = service();
    let handles: Vec<_> = (0..100)
        .map(|i| {
            let svc = svc.clone();
            thread::spawn(move || svc.create(NodeInput::new(format!("node {i}"), "")).id)
        })
        .collect();

    let ids: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids.len(), 100);
    assert_eq!(svc.count(), 100);

    let listed: HashSet<_> = svc.list().into_iter().map(|n| n.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn concurrent_mixed_operations_stay_consistent() {
    let svc = service();
    let seeded: Vec<_> = (0..20)
        .map(|i| svc.create(NodeInput::new(format!("seed {i}"), "")).id)
        .collect();

    let deleters: Vec<_> = seeded
        .iter()
        .take(10)
        .cloned()
        .map(|id| {
            let svc = svc.clone();
            thread::spawn(move || svc.delete(&id).is_ok())
        })
        .collect();
    let creators: Vec<_> = (0..10)
        .map(|i| {
            let svc = svc.clone();
            thread::spawn(move || {
                svc.create(NodeInput::new(format!("new {i}"), ""));
                true
            })
        })
        .collect();

    for handle in deleters.into_iter().chain(creators) {
        assert!(handle.join().unwrap());
    }
    assert_eq!(svc.count(), 20);
    for id in seeded.iter().take(10) {
        assert!(svc.get(id).is_err());
    }
}

#[test]
fn update_racing_delete_never_brings_node_back() {
    let svc = service();
    for round in 0..500 {
        let node = svc.create(NodeInput::new(format!("round {round}"), ""));
        let barrier = Arc::new(Barrier::new(2));

        let updater = {
            let (svc, barrier, id) = (svc.clone(), barrier.clone(), node.id.clone());
            thread::spawn(move || {
                barrier.wait();
                svc.update(&id, NodeInput::new("updated", "")).is_ok()
            })
        };
        let deleter = {
            let (svc, barrier, id) = (svc.clone(), barrier.clone(), node.id.clone());
            thread::spawn(move || {
                barrier.wait();
                svc.delete(&id).is_ok()
            })
        };

        let _ = updater.join().unwrap();
        assert!(deleter.join().unwrap());
        assert_eq!(svc.get(&node.id), Err(NodeError::NotFound(node.id.clone())));
        assert_eq!(svc.count(), 0);
    }
}
