//! Checklist Item Component
//!
//! A clickable row; the whole row toggles the item.

use checklist_core::ChecklistItem;
use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn ChecklistItemRow(item: &'static ChecklistItem) -> impl IntoView {
    let ctx = use_checklist();
    let id = item.id;
    let done = move || ctx.is_done(id);

    view! {
        <div
            class=move || if done() { "checklist-item done" } else { "checklist-item" }
            role="checkbox"
            aria-checked=move || done().to_string()
            on:click=move |_| ctx.toggle(id)
        >
            <div class="item-checkbox">
                <Show when=done>
                    <span class="item-checkmark">"✓"</span>
                </Show>
            </div>
            <div class="item-body">
                <h4 class="item-label">{item.label}</h4>
                {item.description.map(|description| view! { <p class="item-description">{description}</p> })}
            </div>
        </div>
    }
}
