use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ClientStore, KeyValueStore};

/// Lists every registered client, oldest first.
///
/// The store itself returns records in no particular order; sorting by id
/// here gives the display a stable registration order.
pub fn run<B: KeyValueStore>(store: &ClientStore<B>) -> Result<CmdResult> {
    let mut clients = store.get_all()?;
    clients.sort_by_key(|c| c.id);

    let mut result = CmdResult::default().with_listed_clients(clients);
    if result.listed_clients.is_empty() {
        result.add_message(CmdMessage::info("No clients registered."));
    }
    Ok(result)
}
