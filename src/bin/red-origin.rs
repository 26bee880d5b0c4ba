use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use gazelle_origin::commands;
use gazelle_origin::config::OriginConfig;
use gazelle_origin::utils::init_logging;
use gazelle_origin::OriginError;

#[derive(Parser, Debug)]
#[command(name = "red-origin", version, about = "Fetches origin information for a RED torrent")]
struct Args {
    /// Info hash of the torrent
    info_hash: String,

    /// Session cookie for logging in to RED
    cookie: String,

    /// Path to write origin file (defaults to stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// The location of the REDbetter configuration file
    #[arg(long, default_value_os_t = default_redconfig())]
    redconfig: PathBuf,

    /// Increase log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn default_redconfig() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".redactedbetter")
        .join("config")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("REDbetter configuration: {}", args.redconfig.display());

    let config = OriginConfig::load(None).context("loading configuration")?;
    let result = commands::origin_with_session_cookie(
        &config,
        &args.info_hash,
        &args.cookie,
        args.out.as_deref(),
    )
    .await;

    match result {
        Err(OriginError::NotMusic) => {
            eprintln!("Not a music torrent");
            std::process::exit(OriginError::NotMusic.exit_code());
        }
        other => other.with_context(|| format!("fetching origin for {}", args.info_hash)),
    }
}
