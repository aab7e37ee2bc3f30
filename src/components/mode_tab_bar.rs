//! Mode Tab Bar Component
//!
//! Switches between the onboarding and offboarding checklists.

use checklist_core::ChecklistMode;
use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn ModeTabBar() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <div class="mode-tab-bar no-print" role="tablist">
            {ChecklistMode::ALL
                .into_iter()
                .map(|mode| {
                    let is_active = move || ctx.mode.get() == mode;
                    view! {
                        <button
                            role="tab"
                            class=move || if is_active() { "mode-tab active" } else { "mode-tab" }
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| ctx.set_mode(mode)
                        >
                            {mode.tab_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
