//! Progress
//!
//! Completion percent and its color tier. Never stored, always derived.

use std::fmt;

/// Color tier shown on the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// Below 50%
    Alert,
    /// 50% up to (not including) 80%
    Warning,
    /// 80% and above
    Success,
}

impl ProgressTier {
    /// Tier for a percent; boundaries belong to the higher tier
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=49 => ProgressTier::Alert,
            50..=79 => ProgressTier::Warning,
            _ => ProgressTier::Success,
        }
    }

    /// Bar fill color
    pub fn color(&self) -> &'static str {
        match self {
            ProgressTier::Alert => "#e74c3c",
            ProgressTier::Warning => "#f1c40f",
            ProgressTier::Success => "#2ecc71",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressTier::Alert => "alert",
            ProgressTier::Warning => "warning",
            ProgressTier::Success => "success",
        }
    }
}

/// Integer completion percent in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub const COMPLETE: Progress = Progress(100);

    /// round(100 * done / total), halves rounding up. An empty checklist is 0%.
    pub fn of(done: usize, total: usize) -> Self {
        if total == 0 {
            return Progress(0);
        }
        let done = done.min(total);
        let percent = (200 * done + total) / (2 * total);
        Progress(percent as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> ProgressTier {
        ProgressTier::for_percent(self.0)
    }

    pub fn is_complete(&self) -> bool {
        *self == Self::COMPLETE
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_matches_rounded_ratio() {
        for total in 1..=20usize {
            for done in 0..=total {
                let expected = (100.0 * done as f64 / total as f64).round() as u8;
                let progress = Progress::of(done, total);
                assert_eq!(progress.percent(), expected, "{done}/{total}");
                assert!(progress.percent() <= 100);
            }
        }
    }

    #[test]
    fn test_eight_item_boundaries() {
        assert_eq!(Progress::of(1, 8).percent(), 13);
        assert_eq!(Progress::of(4, 8).percent(), 50);
        assert_eq!(Progress::of(4, 8).tier(), ProgressTier::Warning);
        assert_eq!(Progress::of(3, 8).tier(), ProgressTier::Alert);
        assert_eq!(Progress::of(6, 8).percent(), 75);
        assert_eq!(Progress::of(6, 8).tier(), ProgressTier::Warning);
        assert_eq!(Progress::of(7, 8).percent(), 88);
        assert_eq!(Progress::of(7, 8).tier(), ProgressTier::Success);
        assert!(Progress::of(8, 8).is_complete());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ProgressTier::for_percent(0), ProgressTier::Alert);
        assert_eq!(ProgressTier::for_percent(49), ProgressTier::Alert);
        assert_eq!(ProgressTier::for_percent(50), ProgressTier::Warning);
        assert_eq!(ProgressTier::for_percent(79), ProgressTier::Warning);
        assert_eq!(ProgressTier::for_percent(80), ProgressTier::Success);
        assert_eq!(ProgressTier::for_percent(100), ProgressTier::Success);
        assert_eq!(ProgressTier::Warning.color(), "#f1c40f");
    }

    #[test]
    fn test_empty_checklist() {
        assert_eq!(Progress::of(0, 0).percent(), 0);
        assert!(!Progress::of(0, 0).is_complete());
        assert_eq!(Progress::of(3, 8).to_string(), "38%");
    }
}
