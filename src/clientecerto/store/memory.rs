use super::KeyValueStore;
use crate::error::{ClienteError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory store for testing.
///
/// Uses `RefCell` for the error switch since everything here is
/// single-threaded; the map itself only needs `&mut self`.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_write(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ClienteError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    /// Test helper: plant a raw value under a key, bypassing the record
    /// adapter. Lets tests stage corrupt entries.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_write()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_write()?;
        self.entries.remove(key);
        Ok(())
    }

    fn all_keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>> {
        keys.iter()
            .map(|key| Ok((key.clone(), self.entries.get(key).cloned())))
            .collect()
    }

    fn multi_remove(&mut self, keys: &[String]) -> Result<()> {
        self.check_write()?;
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }
}
