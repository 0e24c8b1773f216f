use crate::fixtures::path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wikirace_core::{DiscoveryLedger, SearchError, reconstruct_path};

#[test]
fn test_mark_seen_only_once() {
    let ledger = DiscoveryLedger::new();

    assert!(ledger.mark_seen("A"));
    assert!(!ledger.mark_seen("A"));
    assert!(ledger.is_seen("A"));
    assert!(!ledger.is_seen("B"));
    assert_eq!(ledger.seen_count(), 1);
}

#[test]
fn test_first_predecessor_wins() {
    let ledger = DiscoveryLedger::new();

    ledger.record_predecessor("C", "A");
    ledger.record_predecessor("C", "B");

    assert_eq!(ledger.predecessor_of("C"), Some("A".to_string()));
    assert_eq!(ledger.predecessor_of("A"), None);
}

#[test]
fn test_discover_races_have_one_winner() {
    let ledger = Arc::new(DiscoveryLedger::new());
    let winners = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..16)
        .map(|worker| {
            let ledger = Arc::clone(&ledger);
            let winners = Arc::clone(&winners);
            std::thread::spawn(move || {
                let from = format!("worker-{worker}");
                if ledger.discover("hub", &from) {
                    winners.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    let predecessor = ledger.predecessor_of("hub").unwrap();
    assert!(predecessor.starts_with("worker-"));
}

#[test]
fn test_reconstruct_path_from_chain() {
    let ledger = DiscoveryLedger::new();
    ledger.mark_seen("A");
    ledger.discover("B", "A");
    ledger.discover("C", "B");

    assert_eq!(reconstruct_path(&ledger, "C").unwrap(), path(&["A", "B", "C"]));
    assert_eq!(reconstruct_path(&ledger, "A").unwrap(), path(&["A"]));
}

#[test]
fn test_reconstruct_unseen_goal_is_an_error() {
    let ledger = DiscoveryLedger::new();
    ledger.mark_seen("A");

    let error = reconstruct_path(&ledger, "Z").unwrap_err();

    assert!(matches!(error, SearchError::BrokenPath { ref page } if page == "Z"));
    assert!(!error.is_invalid_input());
}

#[test]
fn test_reconstruct_stops_on_cycle() {
    let ledger = DiscoveryLedger::new();
    ledger.mark_seen("A");
    ledger.mark_seen("B");
    ledger.record_predecessor("A", "B");
    ledger.record_predecessor("B", "A");

    assert!(matches!(
        reconstruct_path(&ledger, "A"),
        Err(SearchError::BrokenPath { .. })
    ));
}
