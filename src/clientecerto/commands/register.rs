use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClienteError, Result};
use crate::model::Client;
use crate::store::{ClientStore, KeyValueStore};
use crate::{cpf, currency};

/// Registers a new client from raw form input.
///
/// The value goes through the same cents-accumulator normalization the input
/// field applies, so `"12345"` and `"123,45"` both mean 123,45. The tax id is
/// optional; when given it must pass checksum validation. Nothing is
/// persisted unless every field checks out.
pub fn run<B: KeyValueStore>(
    store: &mut ClientStore<B>,
    name: &str,
    value_raw: &str,
    tax_id_raw: Option<&str>,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClienteError::Validation(
            "Client name cannot be empty".to_string(),
        ));
    }

    let value = currency::parse_amount(&currency::format_input(value_raw))?;
    if value.is_sign_negative() || value.is_zero() {
        return Err(ClienteError::Validation(
            "Client value must be positive".to_string(),
        ));
    }

    let tax_id = match tax_id_raw {
        Some(raw) => {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                None
            } else if cpf::is_valid(&digits) {
                Some(digits)
            } else {
                return Err(ClienteError::Validation(format!("Invalid CPF: {}", raw)));
            }
        }
        None => None,
    };

    let client = Client::new(name.to_string(), value, tax_id);
    store.add(&client)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client registered: {} ({})",
        client.name,
        currency::format_amount(client.value)
    )));
    result.affected_clients.push(client);
    Ok(result)
}
