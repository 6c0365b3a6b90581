use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "billing-desk")]
#[command(about = "point of sale client used by cashiers to bill customers and settle cash", version, long_about = None)]
pub(crate) struct Cli {
    #[arg(long, global = true, help = "Billing backend base url, overrides BILLING_API_URL.")]
    pub api_url: Option<String>,
    #[arg(long, global = true, help = "Hand-off file for the last bill, overrides BILLING_SESSION_FILE.")]
    pub session_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// list the product catalog
    Products,
    /// generate a bill and show it
    Bill {
        #[arg(long, default_value = "", help = "Customer email.")]
        email: String,
        #[arg(long = "item", help = "Product and quantity, e.g. LP001:2. Quantity defaults to 1.", value_name = "PRODUCT[:QTY]")]
        items: Vec<ItemArg>,
        #[arg(long = "cash", help = "Cash received per denomination, e.g. 500:3.", value_name = "VALUE:COUNT")]
        cash: Vec<CashArg>,
    },
    /// show the last generated bill
    Show,
    /// list previous bills of a customer
    History {
        #[arg(long, default_value = "", help = "Customer email.")]
        email: String,
    },
}

/// `PRODUCT[:QTY]`, the quantity is kept as typed and validated by the form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemArg {
    pub product_id: String,
    pub quantity: Option<String>,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product_id, quantity) = match s.split_once(':') {
            Some((id, qty)) => (id, Some(qty.to_string())),
            None => (s, None),
        };
        if product_id.trim().is_empty() {
            return Err(format!("missing product in {s:?}"));
        }
        Ok(Self {
            product_id: product_id.trim().to_string(),
            quantity,
        })
    }
}

/// `VALUE:COUNT`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CashArg {
    pub value: u32,
    pub count: String,
}

impl FromStr for CashArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, count) = s
            .split_once(':')
            .ok_or_else(|| format!("expected VALUE:COUNT, got {s:?}"))?;
        let value = value
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid denomination {value:?}: {e}"))?;
        Ok(Self {
            value,
            count: count.to_string(),
        })
    }
}
