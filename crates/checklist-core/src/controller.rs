//! View Controller
//!
//! Active mode plus the completion store, and the host capabilities
//! (confirm dialog, print) the view needs.

use log::{debug, info};

use crate::catalog::{catalog, Catalog, ChecklistMode};
use crate::error::StoreResult;
use crate::port::PersistencePort;
use crate::progress::progress;
use crate::state::CompletionState;
use crate::store::CompletionStore;

/// Prompt shown before clearing every check
pub const RESET_CONFIRM_MESSAGE: &str = "Vill du rensa alla bockar i checklistan?";

/// Blocking dialogs and printing offered by the embedding environment
pub trait HostEnvironment {
    /// Yes/no prompt. `false` when declined or unavailable.
    fn confirm(&self, message: &str) -> bool;

    fn print(&self);
}

pub struct ChecklistController<P, H> {
    store: CompletionStore<P>,
    host: H,
    mode: ChecklistMode,
}

impl<P: PersistencePort, H: HostEnvironment> ChecklistController<P, H> {
    /// Load persisted state and start on the onboarding checklist
    pub fn new(port: P, host: H) -> Self {
        Self {
            store: CompletionStore::load(port),
            host,
            mode: ChecklistMode::default(),
        }
    }

    pub fn mode(&self) -> ChecklistMode {
        self.mode
    }

    /// Switch the visible checklist. Completion state is untouched.
    pub fn set_mode(&mut self, mode: ChecklistMode) {
        debug!("[CONTROLLER] Mode {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    pub fn catalog(&self) -> &'static Catalog {
        catalog(self.mode)
    }

    /// Progress of the active checklist
    pub fn progress(&self) -> u8 {
        self.progress_for(self.mode)
    }

    pub fn progress_for(&self, mode: ChecklistMode) -> u8 {
        progress(catalog(mode).sections, self.store.state())
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.store.is_done(id)
    }

    pub fn state(&self) -> &CompletionState {
        self.store.state()
    }

    pub fn toggle(&mut self, id: &str) -> StoreResult<bool> {
        self.store.toggle(id)
    }

    /// Ask the host for confirmation, then clear everything.
    /// Returns whether the reset happened.
    pub fn request_reset(&mut self) -> StoreResult<bool> {
        if !self.host.confirm(RESET_CONFIRM_MESSAGE) {
            info!("[CONTROLLER] Reset declined");
            return Ok(false);
        }
        self.store.reset()?;
        Ok(true)
    }

    pub fn print(&self) {
        self.host.print();
    }
}
