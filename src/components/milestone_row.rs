//! Milestone Row Component
//!
//! One checkbox + label. The label is rendered as plain text.

use leptos::prelude::*;

use crate::store::{use_checklist_store, WidgetStateStoreFields};

#[component]
pub fn MilestoneRow(
    index: usize,
    label: &'static str,
    #[prop(into)] on_toggle: Callback<usize>,
) -> impl IntoView {
    let store = use_checklist_store();
    let checked = Memo::new(move |_| store.checklist().read().is_checked(index));
    let input_id = format!("milestone-{}", index);

    view! {
        <li
            class="checklist-item"
            style="margin: 0.5rem 0; cursor: pointer; display: flex; align-items: center; flex-wrap: wrap;"
        >
            <input
                id=input_id.clone()
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(index)
                style="margin-right: 0.5rem; flex-shrink: 0;"
            />
            <label
                for=input_id
                style=move || {
                    let decoration = if checked.get() { "line-through" } else { "none" };
                    format!("text-decoration: {}; word-break: break-word; cursor: pointer;", decoration)
                }
            >
                {label}
            </label>
        </li>
    }
}
