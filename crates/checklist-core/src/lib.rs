//! Checklist Core
//!
//! Platform-independent model behind the programming checklist widget.
//!
//! Layered the same way as the UI uses it:
//! - definition: the fixed milestone list
//! - state: per-milestone completion flags and their serialized form
//! - progress: percent and color tier derived from state
//! - storage: synchronous key-value persistence (memory, file, browser)
//! - checklist: the widget model tying it all together

mod checklist;
mod config;
mod definition;
mod error;
mod progress;
mod state;
pub mod storage;

pub use checklist::{Checklist, Toggled};
pub use config::ChecklistConfig;
pub use definition::{ChecklistDefinition, PROGRAMMING_MILESTONES};
pub use error::{ChecklistError, Result, StorageError};
pub use progress::{Progress, ProgressTier};
pub use state::ChecklistState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Namespace key the checklist state is persisted under
pub const STORAGE_KEY: &str = "programming-checklist";
