use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

/// Client configs
#[derive(Debug, Clone)]
pub(crate) struct ClientConfig {
    /// base url of the billing backend
    pub api_url: String,
    /// where the last bill is handed off to the bill screen
    pub session_file: PathBuf,
    /// denominations offered on the cash form, largest first
    pub denominations: Vec<u32>,
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn new(
        api_url: String,
        session_file: PathBuf,
        denominations: Vec<u32>,
        http_timeout: Duration,
    ) -> Self {
        Self {
            api_url,
            session_file,
            denominations,
            http_timeout,
        }
    }
}

/// Parse a comma separated denomination list, e.g. `"2000,500,100"`.
/// Duplicates and zero are dropped; the result is sorted largest first.
pub(crate) fn parse_denominations(raw: &str) -> Result<Vec<u32>, ParseIntError> {
    let mut values = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()?;
    values.retain(|v| *v > 0);
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();
    Ok(values)
}
