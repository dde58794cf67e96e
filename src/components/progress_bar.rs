//! Progress Bar Component
//!
//! Percent readout plus a bar colored by progress tier.

use checklist_core::Progress;
use leptos::prelude::*;

const TRACK_STYLE: &str = "height: 12px; width: 100%; background-color: #e0e0e0; border-radius: 6px; margin-top: 0.3rem; overflow: hidden;";

/// Inline style of the filled part of the bar
pub fn fill_style(progress: Progress) -> String {
    format!(
        "width: {}%; height: 100%; background-color: {}; border-radius: 6px; transition: width 0.3s, background-color 0.3s;",
        progress.percent(),
        progress.tier().color()
    )
}

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="checklist-progress" style="margin-bottom: 1rem;">
            <strong>"Progress:"</strong>
            " "
            {move || progress.get().to_string()}
            <div
                class="checklist-progress-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || progress.get().percent().to_string()
                style=TRACK_STYLE
            >
                <div
                    class=move || format!("checklist-progress-fill {}", progress.get().tier().as_str())
                    style=move || fill_style(progress.get())
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_by_tier() {
        assert!(fill_style(Progress::of(0, 8)).starts_with("width: 0%;"));
        assert!(fill_style(Progress::of(3, 8)).contains("background-color: #e74c3c"));

        let half = fill_style(Progress::of(4, 8));
        assert!(half.starts_with("width: 50%;"));
        assert!(half.contains("background-color: #f1c40f"));

        let most = fill_style(Progress::of(7, 8));
        assert!(most.starts_with("width: 88%;"));
        assert!(most.contains("background-color: #2ecc71"));
    }
}
