//! Completion Store
//!
//! In-memory [`CompletionState`] mirrored to a [`PersistencePort`]. Reads
//! fail soft; every toggle and reset is exactly one write.

use log::{debug, info, warn};

use crate::error::StoreResult;
use crate::port::PersistencePort;
use crate::state::CompletionState;

pub struct CompletionStore<P> {
    port: P,
    state: CompletionState,
}

impl<P: PersistencePort> CompletionStore<P> {
    /// Read the persisted map. Missing, unreadable or malformed data all
    /// yield an empty store.
    pub fn load(port: P) -> Self {
        let state = match port.load() {
            Ok(Some(raw)) => match CompletionState::from_json(&raw) {
                Ok(state) => {
                    info!("[STORE] Loaded {} persisted entries", state.len());
                    state
                }
                Err(e) => {
                    warn!("[STORE] Ignoring malformed persisted state: {}", e);
                    CompletionState::new()
                }
            },
            Ok(None) => CompletionState::new(),
            Err(e) => {
                warn!("[STORE] Could not read persisted state: {}", e);
                CompletionState::new()
            }
        };
        Self { port, state }
    }

    pub fn state(&self) -> &CompletionState {
        &self.state
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.state.is_done(id)
    }

    /// Flip `id` and write the whole map back. Returns the new value.
    ///
    /// On a write error the in-memory state keeps the change.
    pub fn toggle(&mut self, id: &str) -> StoreResult<bool> {
        let done = self.state.toggle(id);
        debug!("[STORE] Toggled {} -> {}", id, done);
        let raw = self.state.to_json()?;
        self.port.save(&raw)?;
        Ok(done)
    }

    /// Empty the map and remove the persisted key
    pub fn reset(&mut self) -> StoreResult<()> {
        self.state.clear();
        info!("[STORE] Cleared completion state");
        self.port.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::port::MemoryPort;

    #[test]
    fn test_load_empty_port() {
        let port = MemoryPort::new();
        let store = CompletionStore::load(&port);
        assert!(store.state().is_empty());
        assert_eq!(port.writes(), 0);
    }

    #[test]
    fn test_load_persisted_value() {
        let port = MemoryPort::with_value(r#"{"contract":true,"keys":false}"#);
        let store = CompletionStore::load(&port);
        assert!(store.is_done("contract"));
        assert!(!store.is_done("keys"));
    }

    #[test]
    fn test_load_fails_soft() {
        for raw in ["{broken", "null", "[true]", r#"{"contract": 1}"#, ""] {
            let store = CompletionStore::load(MemoryPort::with_value(raw));
            assert!(store.state().is_empty(), "expected empty state for {:?}", raw);
        }
        let store = CompletionStore::load(MemoryPort::unavailable());
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_toggle_writes_full_map_once() {
        let port = MemoryPort::new();
        let mut store = CompletionStore::load(&port);

        assert!(store.toggle("contract").unwrap());
        assert_eq!(port.writes(), 1);
        assert_eq!(port.value().as_deref(), Some(r#"{"contract":true}"#));

        assert!(store.toggle("it_account").unwrap());
        assert_eq!(port.writes(), 2);
        assert_eq!(port.value().as_deref(), Some(r#"{"contract":true,"it_account":true}"#));

        assert!(!store.toggle("contract").unwrap());
        assert_eq!(port.writes(), 3);
        assert_eq!(port.value().as_deref(), Some(r#"{"it_account":true}"#));
    }

    #[test]
    fn test_toggle_twice_restores_persisted_content() {
        let port = MemoryPort::with_value(r#"{"keys":true}"#);
        let mut store = CompletionStore::load(&port);
        let before = store.state().clone();

        store.toggle("equipment").unwrap();
        store.toggle("equipment").unwrap();

        assert_eq!(store.state(), &before);
        assert_eq!(CompletionState::from_json(&port.value().unwrap()).unwrap(), before);
    }

    #[test]
    fn test_reset_removes_key() {
        let port = MemoryPort::with_value(r#"{"contract":true,"off_keys":true}"#);
        let mut store = CompletionStore::load(&port);

        store.reset().unwrap();

        assert!(store.state().is_empty());
        assert_eq!(port.value(), None);
        assert_eq!(port.writes(), 1);

        // Already empty: still exactly one more removal
        store.reset().unwrap();
        assert_eq!(port.value(), None);
        assert_eq!(port.writes(), 2);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = CompletionStore::load(MemoryPort::unavailable());

        let err = store.toggle("contract").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(store.is_done("contract"));

        assert!(store.reset().is_err());
        assert!(store.state().is_empty());
    }
}
