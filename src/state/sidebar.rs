//! Sidebar layout state.
//!
//! Two independent flags drive the sidebar: the desktop collapse state and
//! the mobile overlay. Every combination is legal. Transitions are
//! synchronous and infallible; observers receive the new snapshot on every
//! transition via a watch channel (last-write-wins, no event queue).

use tokio::sync::watch;
use tracing::debug;

/// Snapshot of the sidebar flags. Both start `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Desktop layout collapse flag
    pub is_collapsed: bool,
    /// Mobile overlay visibility flag
    pub is_mobile_open: bool,
}

/// Shared sidebar store with an enumerated set of transitions.
///
/// Built once per client session and passed to consumers; lives until the
/// session ends and is never persisted.
#[derive(Debug)]
pub struct SidebarStore {
    tx: watch::Sender<SidebarState>,
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarStore {
    /// Create a store with both flags cleared.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SidebarState::default());
        Self { tx }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> SidebarState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes. The receiver always yields the latest
    /// snapshot; intermediate states overwritten before a read are not
    /// replayed.
    pub fn subscribe(&self) -> watch::Receiver<SidebarState> {
        self.tx.subscribe()
    }

    /// Flip the desktop collapse flag. Leaves the mobile overlay untouched.
    pub fn toggle(&self) {
        self.transition(|s| s.is_collapsed = !s.is_collapsed);
    }

    /// Collapse the desktop sidebar. Idempotent.
    pub fn collapse(&self) {
        self.transition(|s| s.is_collapsed = true);
    }

    /// Expand the desktop sidebar. Idempotent.
    pub fn expand(&self) {
        self.transition(|s| s.is_collapsed = false);
    }

    /// Show the mobile overlay. Idempotent.
    pub fn open_mobile(&self) {
        self.transition(|s| s.is_mobile_open = true);
    }

    /// Hide the mobile overlay. Idempotent.
    pub fn close_mobile(&self) {
        self.transition(|s| s.is_mobile_open = false);
    }

    fn transition(&self, f: impl FnOnce(&mut SidebarState)) {
        self.tx.send_modify(f);
        debug!(state = ?self.snapshot(), "sidebar transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = SidebarStore::new();
        assert_eq!(store.snapshot(), SidebarState::default());
        assert!(!store.snapshot().is_collapsed);
        assert!(!store.snapshot().is_mobile_open);
    }

    #[test]
    fn test_toggle_is_involution() {
        let store = SidebarStore::new();
        let before = store.snapshot().is_collapsed;
        store.toggle();
        assert_eq!(store.snapshot().is_collapsed, !before);
        store.toggle();
        assert_eq!(store.snapshot().is_collapsed, before);
    }

    #[test]
    fn test_toggle_leaves_mobile_untouched() {
        let store = SidebarStore::new();
        store.open_mobile();
        store.toggle();
        assert!(store.snapshot().is_mobile_open);
    }

    #[test]
    fn test_collapse_then_expand_terminal() {
        let store = SidebarStore::new();
        // From either prior state the pair ends expanded
        store.toggle();
        store.collapse();
        store.expand();
        assert!(!store.snapshot().is_collapsed);

        store.collapse();
        store.expand();
        assert!(!store.snapshot().is_collapsed);
    }

    #[test]
    fn test_set_operations_idempotent() {
        let store = SidebarStore::new();
        store.collapse();
        store.collapse();
        assert!(store.snapshot().is_collapsed);
        store.open_mobile();
        store.open_mobile();
        assert!(store.snapshot().is_mobile_open);
        store.close_mobile();
        store.close_mobile();
        assert!(!store.snapshot().is_mobile_open);
    }

    #[test]
    fn test_flags_are_independent_axes() {
        let store = SidebarStore::new();
        store.collapse();
        store.open_mobile();
        let s = store.snapshot();
        assert!(s.is_collapsed && s.is_mobile_open);
    }

    #[test]
    fn test_late_subscriber_sees_latest_only() {
        let store = SidebarStore::new();
        store.collapse();
        store.open_mobile();

        // Subscribed after both transitions: only the final snapshot is
        // observable.
        let rx = store.subscribe();
        let seen = *rx.borrow();
        assert!(seen.is_collapsed);
        assert!(seen.is_mobile_open);
    }

    #[tokio::test]
    async fn test_subscriber_notified_on_transition() {
        let store = SidebarStore::new();
        let mut rx = store.subscribe();

        store.collapse();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_collapsed);
    }
}
