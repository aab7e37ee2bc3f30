//! Persistence Port
//!
//! Abstract single-key storage for the completion map. The browser build
//! backs it with `localStorage`; tests use [`MemoryPort`].

use std::cell::{Cell, RefCell};

use crate::error::{StoreError, StoreResult};

/// Key the completion map is stored under
pub const STORAGE_KEY: &str = "staff_checklist_state";

/// Storage for one serialized value under a fixed key
pub trait PersistencePort {
    /// Raw stored value, `None` when nothing has been saved
    fn load(&self) -> StoreResult<Option<String>>;

    /// Replace the stored value
    fn save(&self, value: &str) -> StoreResult<()>;

    /// Remove the key entirely
    fn clear(&self) -> StoreResult<()>;
}

/// In-memory port that records every write
#[derive(Debug, Default)]
pub struct MemoryPort {
    value: RefCell<Option<String>>,
    writes: Cell<usize>,
    unavailable: bool,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port that already holds `raw`
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Port whose every operation fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of saves plus clears performed so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable {
            Err(StoreError::Unavailable("memory port disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl PersistencePort for MemoryPort {
    fn load(&self) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.value())
    }

    fn save(&self, value: &str) -> StoreResult<()> {
        self.check()?;
        *self.value.borrow_mut() = Some(value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.check()?;
        *self.value.borrow_mut() = None;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl<P: PersistencePort + ?Sized> PersistencePort for &P {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, value: &str) -> StoreResult<()> {
        (**self).save(value)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}
