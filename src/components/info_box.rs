//! Info Box Component
//!
//! Responsible roles, the ground rule and (on screen only) progress.

use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn InfoBox() -> impl IntoView {
    let ctx = use_checklist();
    let progress = move || ctx.progress();

    view! {
        <div class="info-box">
            <div class="info-responsible">
                <h3>"Ansvarig"</h3>
                <ul>
                    <li>"• Elevhälsochef"</li>
                    <li>"• Skoladministratör / Intendent"</li>
                </ul>
            </div>
            <div class="info-rule">
                <h3>"Grundregel"</h3>
                <p>
                    "Inga rättigheter delas ut förrän anställningen är korrekt registrerad i "
                    <span class="info-rule-system">"Edlevo/Personec"</span>
                    "."
                </p>
            </div>
            <div class="info-status no-print">
                <h3>"Status"</h3>
                <span class="progress-value">{move || format!("{}%", progress())}</span>
                <div
                    class="progress-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || progress().to_string()
                >
                    <div class="progress-fill" style:width=move || format!("{}%", progress())></div>
                </div>
            </div>
        </div>
    }
}
