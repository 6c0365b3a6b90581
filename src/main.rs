//! application entry point

use crate::desk::api::http::HttpBillingApi;
use crate::desk::cli::Cli;
use crate::desk::controller::BillingDesk;
use crate::desk::model::config::{parse_denominations, ClientConfig};
use crate::desk::session::FileSessionStore;
use anyhow::Context;
use clap::Parser;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

mod desk;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_FILE: &str = ".billing-session.json";
const DEFAULT_DENOMINATIONS: &str = "2000,500,200,100,50,20,10,5,2,1";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_result = match env {
        Env::Prod | Env::Stg => Ok(()), // provided by the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv_result {
        if !e.not_found() {
            warn!("failed to load .env.dev, {}", e);
        }
    }

    // c. config, flags win over env
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| env::var("BILLING_API_URL").ok())
        .unwrap_or(DEFAULT_API_URL.to_string());
    let session_file = cli
        .session_file
        .clone()
        .or_else(|| env::var("BILLING_SESSION_FILE").ok().map(PathBuf::from))
        .unwrap_or(PathBuf::from(DEFAULT_SESSION_FILE));
    let denominations = parse_denominations(
        &env::var("BILLING_DENOMINATIONS").unwrap_or(DEFAULT_DENOMINATIONS.to_string()),
    )
    .context("invalid BILLING_DENOMINATIONS")?;
    let http_timeout = match env::var("BILLING_HTTP_TIMEOUT_SECS") {
        Ok(v) => v.parse().context("invalid BILLING_HTTP_TIMEOUT_SECS")?,
        Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    let config = ClientConfig::new(
        api_url,
        session_file,
        denominations,
        Duration::from_secs(http_timeout),
    );

    info!("billing desk is starting in env={}, api={}", env, config.api_url);

    // d. run command
    let api = HttpBillingApi::new(&config.api_url, config.http_timeout)
        .context("failed to build backend client")?;
    let billing_desk = BillingDesk::new(api, FileSessionStore::new(config.session_file.clone()));
    match desk::run(&billing_desk, &config.denominations, cli.command).await {
        Ok(screen) => {
            print!("{}", screen);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
