//! Checklist Context
//!
//! The controller lives in one signal provided via Leptos Context API.

use checklist_core::{validate, catalog, Catalog, ChecklistController, ChecklistMode};
use leptos::prelude::*;

use crate::browser::{BrowserHost, LocalStoragePort};

pub type Controller = ChecklistController<LocalStoragePort, BrowserHost>;

/// Shared handle to the checklist controller
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    controller: RwSignal<Controller>,
    /// Active mode; only notifies when the mode really changes
    pub mode: Memo<ChecklistMode>,
}

impl ChecklistContext {
    /// Load persisted state from `localStorage` and build the context
    pub fn load() -> Self {
        let all: Vec<&Catalog> = ChecklistMode::ALL.iter().map(|mode| catalog(*mode)).collect();
        if let Err(e) = validate(&all) {
            log::error!("[APP] Checklist content is inconsistent: {}", e);
        }

        let controller = RwSignal::new(ChecklistController::new(LocalStoragePort::default(), BrowserHost));
        let mode = Memo::new(move |_| controller.with(|c| c.mode()));
        Self { controller, mode }
    }

    pub fn catalog(&self) -> &'static Catalog {
        catalog(self.mode.get())
    }

    pub fn set_mode(&self, mode: ChecklistMode) {
        if self.mode.get_untracked() != mode {
            self.controller.update(|c| c.set_mode(mode));
        }
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.controller.with(|c| c.is_done(id))
    }

    /// Progress of the active checklist
    pub fn progress(&self) -> u8 {
        self.controller.with(|c| c.progress())
    }

    pub fn toggle(&self, id: &str) {
        self.controller.update(|c| {
            if let Err(e) = c.toggle(id) {
                log::error!("[APP] Could not save toggle of {}: {}", id, e);
            }
        });
    }

    /// Confirm with the user, then clear every check
    pub fn reset(&self) {
        self.controller.update(|c| match c.request_reset() {
            Ok(true) => log::info!("[APP] Checklist reset"),
            Ok(false) => {}
            Err(e) => log::error!("[APP] Could not remove saved state: {}", e),
        });
    }

    pub fn print(&self) {
        self.controller.with_untracked(|c| c.print());
    }
}

pub fn use_checklist() -> ChecklistContext {
    expect_context::<ChecklistContext>()
}
