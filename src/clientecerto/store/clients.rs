use super::KeyValueStore;
use crate::error::{ClienteError, Result};
use crate::model::Client;

/// Record adapter over a raw [`KeyValueStore`].
///
/// Owns the storage-key scheme (the stringified record id) and the JSON
/// encoding of records. Records are write-once: `add` and the two removal
/// operations are the whole lifecycle, there is no update.
pub struct ClientStore<B: KeyValueStore> {
    /// The underlying key-value backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: KeyValueStore> ClientStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Persist a client under its id.
    ///
    /// The positive-value invariant is enforced here as well as in the
    /// registration flow, so no path can persist a worthless record. Backend
    /// failures propagate to the caller untouched.
    pub fn add(&mut self, client: &Client) -> Result<()> {
        if client.value.is_sign_negative() || client.value.is_zero() {
            return Err(ClienteError::Validation(
                "Client value must be positive".to_string(),
            ));
        }

        let encoded = serde_json::to_string(client).map_err(ClienteError::Serialization)?;
        self.backend.set(&client.key(), &encoded)
    }

    /// Read every stored client, in no guaranteed order.
    ///
    /// Keys whose value is gone by read time are skipped. A value that is
    /// present but does not parse back into a record aborts the whole read:
    /// a silently shortened list would be indistinguishable from data loss.
    pub fn get_all(&self) -> Result<Vec<Client>> {
        let keys = self.backend.all_keys()?;
        let mut clients = Vec::with_capacity(keys.len());

        for (key, value) in self.backend.multi_get(&keys)? {
            let Some(value) = value else {
                continue;
            };
            let client: Client = serde_json::from_str(&value)
                .map_err(|source| ClienteError::Corrupt { key, source })?;
            clients.push(client);
        }

        Ok(clients)
    }

    /// Delete the record with the given id. Idempotent: removing an id that
    /// was never stored (or is already gone) succeeds.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        self.backend.remove(&id.to_string())
    }

    /// Delete every stored record. Best-effort across keys; the first
    /// backend failure surfaces and the remaining keys keep their records.
    pub fn remove_all(&mut self) -> Result<()> {
        let keys = self.backend.all_keys()?;
        self.backend.multi_remove(&keys)
    }
}
