//! Completion State
//!
//! Flat map from item id to "done". Serialized as a JSON object of
//! booleans, e.g. `{"contract":true}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionState(BTreeMap<String, bool>);

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted value
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Absent ids count as not done
    pub fn is_done(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Flip `id` and return its new value. Unchecking drops the entry so
    /// that toggling twice leaves the map as it was.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_done(id) {
            self.0.remove(id);
            false
        } else {
            self.0.insert(id.to_string(), true);
            true
        }
    }

    /// How many of `ids` are marked done
    pub fn done_count<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter().filter(|id| self.is_done(id)).count()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for CompletionState {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, done)| (id.into(), done)).collect())
    }
}
