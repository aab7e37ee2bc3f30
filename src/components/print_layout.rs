//! Print Layout Components
//!
//! Header and signature footer that only appear on paper.

use leptos::prelude::*;

use crate::app::ORGANIZATION;
use crate::context::use_checklist;

#[component]
pub fn PrintHeader() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <div class="print-header print-only">
            <h1>{move || format!("Checklista system för {}", ctx.catalog().print_title())}</h1>
            <div class="print-header-meta">
                <span>{ORGANIZATION}</span>
                <span>"Skola / Enhet: _______________________"</span>
            </div>
        </div>
    }
}

#[component]
pub fn PrintFooter() -> impl IntoView {
    view! {
        <div class="print-footer print-only">
            <div class="print-signatures">
                <div class="signature-line"><p>"Signatur Ansvarig"</p></div>
                <div class="signature-line"><p>"Namnförtydligande"</p></div>
            </div>
            <div class="print-signatures">
                <div class="signature-line"><p>"Datum"</p></div>
                <p class="print-archive-note">
                    "Detta dokument ska arkiveras enligt gällande gallringsrutiner vid respektive enhet."
                </p>
            </div>
        </div>
    }
}
