use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A registered client. Records are write-once: there is no update operation,
/// only registration and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique id, also the storage key (in string form). Derived from the
    /// registration clock, so it doubles as a creation timestamp.
    pub id: u64,
    pub name: String,
    pub value: Decimal,
    /// Eleven validated digits, or `None` when the client did not provide one.
    pub tax_id: Option<String>,
}

impl Client {
    pub fn new(name: String, value: Decimal, tax_id: Option<String>) -> Self {
        Self {
            id: next_id(),
            name,
            value,
            tax_id,
        }
    }

    /// The storage key for this record.
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    /// When this client was registered, recovered from the id.
    pub fn registered_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.id as i64)
            .single()
            .unwrap_or_default()
    }
}

/// Issues a unique record id: current Unix time in milliseconds, bumped past
/// the previously issued id when two registrations land on the same tick.
pub fn next_id() -> u64 {
    static LAST: AtomicU64 = AtomicU64::new(0);
    let now = Utc::now().timestamp_millis().max(0) as u64;
    LAST.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(now.max(last + 1))
    })
    .map(|last| now.max(last + 1))
    .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_are_strictly_increasing() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn key_is_the_stringified_id() {
        let client = Client {
            id: 42,
            name: "Maria".into(),
            value: Decimal::from_str("10.00").unwrap(),
            tax_id: None,
        };
        assert_eq!(client.key(), "42");
    }

    #[test]
    fn registered_at_tracks_the_id() {
        let client = Client::new("Ana".into(), Decimal::ONE, None);
        let age = Utc::now() - client.registered_at();
        assert!(age.num_seconds() < 5);
    }

    #[test]
    fn serialization_round_trips() {
        let client = Client {
            id: 1700000000000,
            name: "João da Silva".into(),
            value: Decimal::from_str("123.45").unwrap(),
            tax_id: Some("11144477735".into()),
        };
        let json = serde_json::to_string(&client).unwrap();
        let parsed: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(client, parsed);
    }
}
