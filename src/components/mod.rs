//! UI Components
//!
//! Leptos components making up the checklist page.

mod checklist_header;
mod mode_tab_bar;
mod info_box;
mod section_view;
mod checklist_item_row;
mod print_layout;

pub use checklist_header::ChecklistHeader;
pub use mode_tab_bar::ModeTabBar;
pub use info_box::InfoBox;
pub use section_view::ChecklistSectionView;
pub use checklist_item_row::ChecklistItemRow;
pub use print_layout::{PrintFooter, PrintHeader};
