//! Confetti Component
//!
//! Non-recycling confetti burst covering the viewport. Pieces are laid out
//! once on mount; the overlay follows viewport resizes.

use leptos::prelude::*;

use crate::confetti::{scatter, KEYFRAMES};
use crate::viewport::Viewport;

#[component]
pub fn Confetti(
    #[prop(into)] viewport: Signal<Viewport>,
    #[prop(default = 200)] pieces: usize,
) -> impl IntoView {
    let initial = viewport.get_untracked();
    let layout = scatter(pieces, initial, js_sys::Math::random);
    log::debug!(
        "[Confetti] {} pieces over {}x{}",
        layout.len(),
        initial.width,
        initial.height
    );

    view! {
        <div
            class="confetti"
            aria-hidden="true"
            style=move || {
                let vp = viewport.get();
                format!(
                    "position: fixed; top: 0; left: 0; width: {}px; height: {}px; pointer-events: none; overflow: hidden; z-index: 20;",
                    vp.width,
                    vp.height
                )
            }
        >
            <style>{KEYFRAMES}</style>
            {layout
                .into_iter()
                .map(|piece| view! { <span class="confetti-piece" style=piece.style(initial.height)></span> })
                .collect_view()}
        </div>
    }
}
