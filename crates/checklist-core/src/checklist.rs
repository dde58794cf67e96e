//! Checklist Model
//!
//! Owns the completion state, the celebration latch and the backing store.
//! Every mutation is written through to the store before returning.

use crate::definition::ChecklistDefinition;
use crate::error::{ChecklistError, Result};
use crate::progress::{Progress, ProgressTier};
use crate::state::ChecklistState;
use crate::storage::KeyValueStore;

/// Outcome of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// New value of the toggled flag
    pub checked: bool,
    /// This toggle completed the checklist and the celebration should run
    pub celebrate: bool,
}

/// A milestone checklist bound to a key-value store
#[derive(Debug)]
pub struct Checklist<S> {
    definition: ChecklistDefinition,
    state: ChecklistState,
    /// Completion effect already fired since mount / last reset
    celebrated: bool,
    store: S,
    key: String,
}

impl<S: KeyValueStore> Checklist<S> {
    /// Load state from `store`, falling back to all-unchecked on absent or malformed data
    pub fn initialize(definition: ChecklistDefinition, store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let len = definition.len();
        let state = match store.read(&key) {
            Ok(Some(raw)) => ChecklistState::restore(&raw, len).unwrap_or_else(|| {
                log::warn!("[Checklist] Discarding malformed state under {key:?}: {raw}");
                ChecklistState::cleared(len)
            }),
            Ok(None) => {
                log::debug!("[Checklist] No saved state under {key:?}");
                ChecklistState::cleared(len)
            }
            Err(e) => {
                log::warn!("[Checklist] Could not read {key:?}: {e}");
                ChecklistState::cleared(len)
            }
        };
        log::debug!(
            "[Checklist] Initialized {}/{} complete",
            state.completed(),
            len
        );

        Self {
            definition,
            state,
            celebrated: false,
            store,
            key,
        }
    }

    pub fn definition(&self) -> &ChecklistDefinition {
        &self.definition
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.state.is_checked(index)
    }

    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn tier(&self) -> ProgressTier {
        self.progress().tier()
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    pub fn celebrated(&self) -> bool {
        self.celebrated
    }

    /// Flip the flag at `index` and persist.
    ///
    /// Out-of-range indices leave state and storage untouched.
    pub fn toggle(&mut self, index: usize) -> Result<Toggled> {
        let checked = self
            .state
            .toggle(index)
            .ok_or(ChecklistError::IndexOutOfRange {
                index,
                len: self.definition.len(),
            })?;
        self.persist();
        let celebrate = self.settle();
        Ok(Toggled { checked, celebrate })
    }

    /// Uncheck everything, re-arm the celebration, persist.
    pub fn reset(&mut self) {
        self.state.clear();
        self.celebrated = false;
        self.persist();
        log::info!("[Checklist] Reset");
    }

    /// Completion latch: true exactly once per transition into "all complete".
    pub fn settle(&mut self) -> bool {
        if self.is_complete() && !self.celebrated {
            self.celebrated = true;
            log::info!("[Checklist] All {} milestones complete", self.definition.len());
            true
        } else {
            false
        }
    }

    /// Write the full state; failures are logged, in-memory state stays authoritative
    fn persist(&self) {
        let result = self
            .state
            .to_json()
            .and_then(|raw| self.store.write(&self.key, &raw));
        if let Err(e) = result {
            log::warn!("[Checklist] Failed to persist {:?}: {e}", self.key);
        }
    }
}
