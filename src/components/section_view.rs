//! Checklist Section Component

use checklist_core::ChecklistSection;
use leptos::prelude::*;

use super::ChecklistItemRow;

/// One titled section with its items in catalog order
#[component]
pub fn ChecklistSectionView(section: &'static ChecklistSection) -> impl IntoView {
    view! {
        <section class="checklist-section">
            <div class="section-heading">
                <h2>{section.title}</h2>
                {section.subtitle.map(|subtitle| view! { <span class="section-subtitle">{subtitle}</span> })}
            </div>
            <div class="section-items">
                {section.items.iter().map(|item| view! { <ChecklistItemRow item=item /> }).collect_view()}
            </div>
        </section>
    }
}
