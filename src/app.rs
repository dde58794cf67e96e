//! Programming Checklist App
//!
//! Lesson page shell hosting the checklist widget.

use leptos::prelude::*;

use crate::components::ProgrammingChecklist;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="lesson-page" style="padding: 1rem; font-family: sans-serif;">
            <h1>"What is Programming?"</h1>
            <p>
                "Check off each idea once it makes sense to you. "
                "Your progress is saved in this browser."
            </p>
            <ProgrammingChecklist />
        </main>
    }
}
