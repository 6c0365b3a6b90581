//! Hand-off of the last created bill from the billing screen to the
//! bill screen.

use crate::desk::model::bill::Bill;
use crate::desk::model::denomination::DenominationBreakdown;
use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct HandOff {
    pub bill: Bill,
    #[serde(default)]
    pub denominations: Option<DenominationBreakdown>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Display, Error)]
pub(crate) enum SessionError {
    #[display("hand-off file error: {_0}")]
    Io(io::Error),
    #[display("hand-off data is corrupt: {_0}")]
    Corrupt(serde_json::Error),
}

pub(crate) trait SessionStore {
    fn save(&self, hand_off: &HandOff) -> Result<(), SessionError>;
    /// `None` when nothing has been handed off yet.
    fn load(&self) -> Result<Option<HandOff>, SessionError>;
}

/// Keeps the hand-off in a json file so it survives between commands.
pub(crate) struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, hand_off: &HandOff) -> Result<(), SessionError> {
        let data = serde_json::to_vec_pretty(hand_off).map_err(SessionError::Corrupt)?;
        fs::write(&self.path, data).map_err(SessionError::Io)
    }

    fn load(&self) -> Result<Option<HandOff>, SessionError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e)),
        };
        serde_json::from_slice(&data)
            .map(Some)
            .map_err(SessionError::Corrupt)
    }
}

/// for test
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySessionStore(pub std::cell::RefCell<Option<HandOff>>);

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn save(&self, hand_off: &HandOff) -> Result<(), SessionError> {
        self.0.replace(Some(hand_off.clone()));
        Ok(())
    }

    fn load(&self) -> Result<Option<HandOff>, SessionError> {
        Ok(self.0.borrow().clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::desk::model::denomination::{tally, DenominationInput};

    fn hand_off() -> HandOff {
        HandOff {
            bill: Bill {
                id: Some(1),
                customer_email: "ann@example.com".to_string(),
                created_at: "2024-03-05T10:15:30".to_string(),
                items: vec![],
                total_amount: 500.0,
                tax_amount: 60.0,
                final_amount: 560.0,
            },
            denominations: Some(tally(&[DenominationInput {
                value: 500,
                count: "2".to_string(),
            }])
            .unwrap()),
            saved_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn file_store_keeps_last_hand_off() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);

        store.save(&hand_off()).unwrap();
        let mut newer = hand_off();
        newer.bill.id = Some(2);
        store.save(&newer).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, newer);
        assert_eq!(loaded.denominations.unwrap().total_paid, 1000);
    }

    #[test]
    fn corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, b"{not json").unwrap();
        let store = FileSessionStore::new(path);
        assert!(matches!(store.load(), Err(SessionError::Corrupt(_))));
    }
}
