use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ClientStore, KeyValueStore};

/// Removes the clients with the given ids.
///
/// Removal is idempotent at the store level; an id with no record behind it
/// gets a warning instead of an error, so a retried removal cannot fail.
pub fn run<B: KeyValueStore>(store: &mut ClientStore<B>, ids: &[u64]) -> Result<CmdResult> {
    let existing = store.get_all()?;
    let mut result = CmdResult::default();

    for &id in ids {
        match existing.iter().find(|c| c.id == id) {
            Some(client) => {
                store.remove(id)?;
                result.add_message(CmdMessage::success(format!(
                    "Client removed: {}",
                    client.name
                )));
                result.affected_clients.push(client.clone());
            }
            None => {
                store.remove(id)?;
                result.add_message(CmdMessage::warning(format!("No client with id {}", id)));
            }
        }
    }

    Ok(result)
}
