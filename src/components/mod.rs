//! UI Components
//!
//! Leptos components making up the checklist widget.

mod celebration_banner;
mod confetti;
mod milestone_row;
mod programming_checklist;
mod progress_bar;

pub use celebration_banner::CelebrationBanner;
pub use confetti::Confetti;
pub use milestone_row::MilestoneRow;
pub use programming_checklist::ProgrammingChecklist;
pub use progress_bar::ProgressBar;
