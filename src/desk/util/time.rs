use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Format used for bill dates on screen.
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::set_utc_now;
}

#[cfg(test)]
mod mock_chrono {
    use chrono::DateTime;
    use std::cell::Cell;

    thread_local! {
        static MOCK_NOW: Cell<i64> = const { Cell::new(0) };
    }

    pub fn get_utc_now() -> DateTime<chrono::Utc> {
        MOCK_NOW
            .with(|now| DateTime::<chrono::Utc>::from_timestamp(now.get(), 0))
            .expect("invalid timestamp")
    }

    pub fn set_utc_now(secs: i64) {
        MOCK_NOW.with(|now| now.set(secs));
    }
}

#[cfg(not(test))]
pub fn get_utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a bill timestamp. The backend may send RFC 3339 or a naive
/// ISO timestamp, which is taken as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Local rendering of a bill timestamp, falling back to the raw text.
pub(crate) fn display_local(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
