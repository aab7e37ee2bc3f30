//! Progress Computation

use crate::catalog::ChecklistSection;
use crate::state::CompletionState;

/// Percentage (0-100) of the items in `sections` marked done.
/// Ids in `state` that no section defines are ignored.
pub fn progress(sections: &[ChecklistSection], state: &CompletionState) -> u8 {
    let ids = sections.iter().flat_map(|section| section.items.iter().map(|item| item.id));
    let total = sections.iter().map(|section| section.items.len()).sum();
    percentage(state.done_count(ids), total)
}

/// round(100 * done / total) with halves rounded up; 0 when `total` is 0
pub fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, ChecklistMode};

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 11), 0);
        assert_eq!(percentage(1, 11), 9);
        assert_eq!(percentage(2, 11), 18);
        assert_eq!(percentage(5, 6), 83);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(6, 6), 100);
    }

    #[test]
    fn test_empty_catalog_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(progress(&[], &CompletionState::new()), 0);
    }

    #[test]
    fn test_bounds_for_every_catalog() {
        for mode in ChecklistMode::ALL {
            let sections = catalog(mode).sections;
            assert_eq!(progress(sections, &CompletionState::new()), 0);

            let all: CompletionState = catalog(mode).item_ids().map(|id| (id, true)).collect();
            assert_eq!(progress(sections, &all), 100);

            // Every prefix of the catalog stays within range
            let mut state = CompletionState::new();
            for id in catalog(mode).item_ids() {
                state.toggle(id);
                assert!(progress(sections, &state) <= 100);
            }
        }
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let state = CompletionState::from_json(r#"{"contract": true, "unknown_id": true}"#).unwrap();
        assert_eq!(progress(catalog(ChecklistMode::Onboarding).sections, &state), 9);
    }

    #[test]
    fn test_other_catalog_ids_do_not_count() {
        let state: CompletionState = catalog(ChecklistMode::Offboarding).item_ids().map(|id| (id, true)).collect();
        assert_eq!(progress(catalog(ChecklistMode::Onboarding).sections, &state), 0);
    }
}
