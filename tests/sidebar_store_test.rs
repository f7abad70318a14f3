// Integration tests for the sidebar store: transition semantics and
// observer notification. Complements the unit tests in src/state/sidebar.rs.

use hiredeck::state::{SidebarState, SidebarStore};

#[test]
fn test_full_transition_matrix() {
    let store = SidebarStore::new();

    // All four flag combinations are reachable and legal
    store.collapse();
    store.open_mobile();
    assert_eq!(
        store.snapshot(),
        SidebarState {
            is_collapsed: true,
            is_mobile_open: true
        }
    );

    store.expand();
    assert_eq!(
        store.snapshot(),
        SidebarState {
            is_collapsed: false,
            is_mobile_open: true
        }
    );

    store.close_mobile();
    assert_eq!(store.snapshot(), SidebarState::default());

    store.collapse();
    assert_eq!(
        store.snapshot(),
        SidebarState {
            is_collapsed: true,
            is_mobile_open: false
        }
    );
}

#[test]
fn test_toggle_from_every_state() {
    let store = SidebarStore::new();
    store.open_mobile();

    store.toggle();
    assert!(store.snapshot().is_collapsed);
    assert!(store.snapshot().is_mobile_open);

    store.toggle();
    assert!(!store.snapshot().is_collapsed);
    assert!(store.snapshot().is_mobile_open);
}

#[tokio::test]
async fn test_every_transition_notifies_observers() {
    let store = SidebarStore::new();
    let mut rx = store.subscribe();

    store.toggle();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_collapsed);

    // Idempotent transitions still notify with the (unchanged) snapshot
    store.collapse();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_collapsed);

    store.open_mobile();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_mobile_open);
}

#[tokio::test]
async fn test_observer_sees_last_write_only() {
    let store = SidebarStore::new();
    let mut rx = store.subscribe();

    // Burst of transitions before the observer reads: intermediate states
    // are overwritten, only the final snapshot is delivered.
    store.collapse();
    store.expand();
    store.collapse();
    store.open_mobile();

    rx.changed().await.unwrap();
    let seen = *rx.borrow_and_update();
    assert!(seen.is_collapsed);
    assert!(seen.is_mobile_open);
}

#[test]
fn test_unsubscribed_observer_does_not_block_transitions() {
    let store = SidebarStore::new();
    let rx = store.subscribe();
    drop(rx);

    // No receivers left; transitions stay infallible
    store.toggle();
    store.open_mobile();
    assert!(store.snapshot().is_collapsed);
}
