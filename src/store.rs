//! Checklist Widget Store
//!
//! Uses Leptos reactive_stores so each view only re-renders on the checklist field.

use checklist_core::{Checklist, ChecklistConfig, PROGRAMMING_MILESTONES};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::BrowserStorage;

/// Widget state with field-level reactivity
#[derive(Debug, Store)]
pub struct WidgetState {
    /// Milestone flags, celebration latch and persistence
    pub checklist: Checklist<BrowserStorage>,
    /// Storage key, sound asset, confetti density
    pub config: ChecklistConfig,
}

impl WidgetState {
    /// Load the programming milestones from `localStorage`
    pub fn load(config: ChecklistConfig) -> Self {
        let checklist = Checklist::initialize(
            PROGRAMMING_MILESTONES,
            BrowserStorage,
            config.storage_key.clone(),
        );
        Self { checklist, config }
    }
}

/// Type alias for the store
pub type ChecklistStore = Store<WidgetState>;

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle one milestone. Returns true when this toggle completed the checklist.
pub fn store_toggle(store: &ChecklistStore, index: usize) -> bool {
    match store.checklist().write().toggle(index) {
        Ok(toggled) => toggled.celebrate,
        Err(e) => {
            log::warn!("[Store] Ignoring toggle: {}", e);
            false
        }
    }
}

/// Clear every milestone and re-arm the celebration
pub fn store_reset(store: &ChecklistStore) {
    store.checklist().write().reset();
}

/// Fire the completion latch if pending. Only writes (and notifies) when it fires.
pub fn store_settle(store: &ChecklistStore) -> bool {
    let pending = store
        .checklist()
        .with_untracked(|checklist| checklist.is_complete() && !checklist.celebrated());
    pending && store.checklist().write().settle()
}
