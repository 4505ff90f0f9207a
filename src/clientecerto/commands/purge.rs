use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClienteError, Result};
use crate::store::{ClientStore, KeyValueStore};
use std::io::{self, Write};

/// Removes every registered client.
///
/// Destructive and unrecoverable, so unless `skip_confirm` is set the caller
/// is asked to type `Y` first.
pub fn run<B: KeyValueStore>(store: &mut ClientStore<B>, skip_confirm: bool) -> Result<CmdResult> {
    let clients = store.get_all()?;

    if clients.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No clients to remove."));
        return Ok(res);
    }

    if !skip_confirm {
        println!(
            "This will permanently remove all {} registered client(s).",
            clients.len()
        );
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(ClienteError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(ClienteError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    store.remove_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed all {} client(s).",
        clients.len()
    )));
    result.affected_clients = clients;
    Ok(result)
}
