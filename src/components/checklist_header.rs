//! Checklist Header Component
//!
//! Page title with the print and reset buttons. Hidden when printing.

use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn ChecklistHeader() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <header class="checklist-header no-print">
            <div>
                <h1 class="checklist-title">
                    <span class="checklist-icon">"📋"</span>
                    "Systemchecklista Personal"
                </h1>
                <p class="checklist-lead">"Hantera behörigheter och resurser vid in- och utcheckning."</p>
            </div>
            <div class="checklist-actions">
                <button class="print-btn" on:click=move |_| ctx.print()>
                    "Skriv ut"
                </button>
                // Asks for confirmation before anything is cleared
                <button class="reset-btn" on:click=move |_| ctx.reset()>
                    "Nollställ"
                </button>
            </div>
        </header>
    }
}
