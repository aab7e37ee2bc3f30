//! Staff Checklist Core
//!
//! Browser-independent logic behind the staff onboarding/offboarding
//! checklist: static content, the persisted completion map and the
//! controller the UI drives.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod port;
pub mod progress;
pub mod state;
pub mod store;

pub use catalog::{catalog, validate, Catalog, ChecklistItem, ChecklistMode, ChecklistSection};
pub use controller::{ChecklistController, HostEnvironment, RESET_CONFIRM_MESSAGE};
pub use error::{CatalogError, StoreError, StoreResult};
pub use port::{MemoryPort, PersistencePort, STORAGE_KEY};
pub use progress::{percentage, progress};
pub use state::CompletionState;
pub use store::CompletionStore;
