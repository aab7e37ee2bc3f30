//! Staff Checklist App
//!
//! Page layout: controls, mode tabs and the checklist card with its
//! print-only header and footer.

use leptos::prelude::*;

use crate::components::{ChecklistHeader, ChecklistSectionView, InfoBox, ModeTabBar, PrintFooter, PrintHeader};
use crate::context::ChecklistContext;

/// Shown in the screen footer
const APP_VERSION_LABEL: &str = "Digital Checklista v1.0";
pub const ORGANIZATION: &str = "Danderyds Kommun";

#[component]
pub fn App() -> impl IntoView {
    let ctx = ChecklistContext::load();
    provide_context(ctx);

    view! {
        <div class="checklist-page">
            <ChecklistHeader />
            <ModeTabBar />

            <div class="checklist-card">
                <PrintHeader />
                <InfoBox />

                <div class="checklist-sections">
                    {move || {
                        ctx.catalog()
                            .sections
                            .iter()
                            .map(|section| view! { <ChecklistSectionView section=section /> })
                            .collect_view()
                    }}
                </div>

                <PrintFooter />
            </div>

            <footer class="page-footer no-print">
                <p>{format!("{} • {}", APP_VERSION_LABEL, ORGANIZATION)}</p>
            </footer>
        </div>
    }
}
