use leptos::prelude::*;

/// Congratulations overlay shown while the checklist is complete
#[component]
pub fn CelebrationBanner() -> impl IntoView {
    view! {
        <div
            class="checklist-congrats"
            role="status"
            style="position: absolute; top: 10%; left: 50%; transform: translateX(-50%); background-color: #ffffffcc; padding: 1rem 1.5rem; border-radius: 10px; box-shadow: 0 4px 10px rgba(0,0,0,0.2); text-align: center; font-size: clamp(16px,3vw,22px); font-weight: bold; color: #2ecc71; z-index: 10;"
        >
            "🎉 Congratulations! You completed the checklist! 🎉"
        </div>
    }
}
