use std::collections::HashMap;

use peek_common::StoreError;

use super::StateStore;

/// Non-persistent store used when the state file cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<serde_json::Value> {
        self.data.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}
