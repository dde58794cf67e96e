//! Checklist State
//!
//! Per-milestone completion flags, index-aligned with the definition.
//! Serialized as a flat JSON boolean array.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::progress::Progress;

/// Completion flags for every milestone
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    flags: Vec<bool>,
}

impl ChecklistState {
    /// All-false state of length `len`
    pub fn cleared(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Parse a persisted value, accepting only a boolean array of exactly `len` entries
    pub fn restore(raw: &str, len: usize) -> Option<Self> {
        serde_json::from_str::<Vec<bool>>(raw)
            .ok()
            .filter(|flags| flags.len() == len)
            .map(Self::from_flags)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(&self.flags)?)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag at `index`; out of range reads as unchecked
    pub fn is_checked(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Flip one flag, returning its new value (None when out of range)
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.flags.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|flag| *flag = false);
    }

    /// Number of checked milestones
    pub fn completed(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(self.completed(), self.len())
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_roundtrip() {
        let state = ChecklistState::from_flags(vec![true, false, true, true]);
        let raw = state.to_json().unwrap();
        assert_eq!(raw, "[true,false,true,true]");
        assert_eq!(ChecklistState::restore(&raw, 4), Some(state));
    }

    #[test]
    fn test_restore_rejects_malformed() {
        assert_eq!(ChecklistState::restore("[true,false]", 8), None);
        assert_eq!(ChecklistState::restore("[1,0,1,0,1,0,1,0]", 8), None);
        assert_eq!(ChecklistState::restore("[true,\"x\",false]", 3), None);
        assert_eq!(ChecklistState::restore("null", 8), None);
        assert_eq!(ChecklistState::restore("{\"a\":true}", 1), None);
        assert_eq!(ChecklistState::restore("not json", 8), None);
        assert_eq!(ChecklistState::restore("", 8), None);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut state = ChecklistState::cleared(3);
        assert_eq!(state.toggle(1), Some(true));
        assert_eq!(state.toggle(2), Some(true));
        assert_eq!(state.toggle(1), Some(false));
        assert_eq!(state.toggle(3), None);
        assert_eq!(state.as_slice(), &[false, false, true]);
        assert_eq!(state.completed(), 1);

        state.clear();
        assert_eq!(state, ChecklistState::cleared(3));
    }

    #[test]
    fn test_out_of_range_reads_unchecked() {
        let state = ChecklistState::from_flags(vec![true]);
        assert!(state.is_checked(0));
        assert!(!state.is_checked(5));
    }
}
