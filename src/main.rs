use std::path::PathBuf;

use clap::{ArgAction, Parser};
use gazelle_origin::commands;
use gazelle_origin::config::OriginConfig;
use gazelle_origin::utils::init_logging;
use gazelle_origin::Result;

#[derive(Parser, Debug)]
#[command(
    name = "gazelle-origin",
    version,
    about = "Fetches torrent origin information from Gazelle-based music trackers",
    after_help = "--tracker is optional if the ORIGIN_TRACKER environment variable is set.\n\n\
                  If provided, --tracker must be set to one of the following: red\n\n\
                  The API key is read from the RED_API_KEY environment variable."
)]
struct Args {
    /// Torrent identifier, which can be either its info hash, torrent ID, or permalink
    id: String,

    /// Path to write origin data (default: print to stdout)
    #[arg(short, long, value_name = "file")]
    out: Option<PathBuf>,

    /// Tracker to use
    #[arg(short, long, value_name = "tracker")]
    tracker: Option<String>,

    /// JSON configuration file (default: <config dir>/gazelle-origin/config.json)
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Increase log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        log::debug!("Exiting after error: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = OriginConfig::load(args.config.as_deref())?.with_tracker_flag(args.tracker);

    commands::origin_with_api_key(&config, &args.id, args.out.as_deref()).await
}
