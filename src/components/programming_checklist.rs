//! Programming Checklist Component
//!
//! Milestone list with persisted progress and a one-time celebration on completion.

use checklist_core::ChecklistConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CelebrationBanner, Confetti, MilestoneRow, ProgressBar};
use crate::effects::play_celebration_sound;
use crate::store::{store_reset, store_settle, store_toggle, ChecklistStore, WidgetState, WidgetStateStoreFields};
use crate::viewport::use_viewport;

#[component]
pub fn ProgrammingChecklist() -> impl IntoView {
    let config = ChecklistConfig::default();
    let sound = config.celebration_sound.clone();
    let pieces = config.confetti_pieces;

    let store: ChecklistStore = Store::new(WidgetState::load(config));
    provide_context(store);

    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let viewport = use_viewport();

    let complete = Memo::new(move |_| store.checklist().read().is_complete());
    let progress = Signal::derive(move || store.checklist().read().progress());

    // A checklist restored already complete celebrates once after mount
    Effect::new(move |_| {
        let audio = audio_ref.get();
        if audio.is_some() && store_settle(&store) {
            play_celebration_sound(audio);
        }
    });

    let on_toggle = Callback::new(move |index: usize| {
        if store_toggle(&store, index) {
            play_celebration_sound(audio_ref.get_untracked());
        }
    });

    let labels: Vec<(usize, &'static str)> = store
        .checklist()
        .with_untracked(|checklist| checklist.definition().labels().enumerate().collect());

    view! {
        <div
            class="programming-checklist"
            style="position: relative; padding: 1rem; max-width: 600px; margin: 0 auto; font-size: clamp(14px, 2vw, 18px); line-height: 1.5;"
        >
            <Show when=move || complete.get()>
                <Confetti viewport=viewport pieces=pieces />
                <CelebrationBanner />
            </Show>

            <ProgressBar progress=progress />

            <ul class="checklist-items" style="list-style-type: none; padding-left: 0;">
                {labels.into_iter().map(|(index, label)| view! {
                    <MilestoneRow index=index label=label on_toggle=on_toggle />
                }).collect_view()}
            </ul>

            <button
                class="checklist-reset-btn"
                style="margin-top: 1rem; padding: 0.6rem 1.2rem; font-size: 1rem; background-color: #007acc; color: white; border: none; border-radius: 5px; cursor: pointer; width: 100%;"
                on:click=move |_| store_reset(&store)
            >
                "Reset Checklist"
            </button>

            <audio node_ref=audio_ref src=sound preload="auto"></audio>
        </div>
    }
}
