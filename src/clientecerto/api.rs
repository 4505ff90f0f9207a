//! # API Facade
//!
//! The single entry point for all operations, regardless of the UI driving
//! them. Dispatches to the command layer and returns structured
//! `Result<CmdResult>` values; no business logic, no presentation.
//!
//! `ClienteApi<B: KeyValueStore>` is generic over the storage backend:
//! - Production: `ClienteApi<FileStore>`
//! - Testing: `ClienteApi<MemoryStore>`
//!
//! The facade owns the one `ClientStore` instance for the whole process.
//! Callers never construct their own adapter per call site; they go through
//! the instance injected here.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::ClienteConfig;
use crate::error::Result;
use crate::store::{ClientStore, KeyValueStore};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetCurrencySymbol(String),
}

/// The main API facade.
pub struct ClienteApi<B: KeyValueStore> {
    store: ClientStore<B>,
    data_dir: PathBuf,
}

impl<B: KeyValueStore> ClienteApi<B> {
    pub fn new(backend: B, data_dir: PathBuf) -> Self {
        Self {
            store: ClientStore::with_backend(backend),
            data_dir,
        }
    }

    pub fn register_client(
        &mut self,
        name: &str,
        value_raw: &str,
        tax_id_raw: Option<&str>,
    ) -> Result<CmdResult> {
        commands::register::run(&mut self.store, name, value_raw, tax_id_raw)
    }

    pub fn list_clients(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_clients(&mut self, ids: &[u64]) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn purge_clients(&mut self, skip_confirm: bool) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, skip_confirm)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let mut config = ClienteConfig::load(&self.data_dir)?;
        let mut result = CmdResult::default();

        match action {
            ConfigAction::ShowAll => {}
            ConfigAction::SetCurrencySymbol(symbol) => {
                config.currency_symbol = symbol;
                config.save(&self.data_dir)?;
                result.add_message(CmdMessage::success("Configuration updated."));
            }
        }

        Ok(result.with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn api() -> ClienteApi<MemoryStore> {
        ClienteApi::new(MemoryStore::new(), std::env::temp_dir())
    }

    #[test]
    fn register_and_list_dispatch() {
        let mut api = api();
        api.register_client("Maria", "12345", None).unwrap();

        let listed = api.list_clients().unwrap();
        assert_eq!(listed.listed_clients.len(), 1);
        assert_eq!(listed.listed_clients[0].name, "Maria");
    }

    #[test]
    fn remove_dispatch() {
        let mut api = api();
        let reg = api.register_client("Maria", "100", None).unwrap();
        let id = reg.affected_clients[0].id;

        api.remove_clients(&[id]).unwrap();
        assert!(api.list_clients().unwrap().listed_clients.is_empty());
    }

    #[test]
    fn purge_dispatch() {
        let mut api = api();
        api.register_client("Maria", "100", None).unwrap();
        api.register_client("Ana", "200", None).unwrap();

        api.purge_clients(true).unwrap();
        assert!(api.list_clients().unwrap().listed_clients.is_empty());
    }
}
