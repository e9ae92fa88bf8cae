use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use congress_votes::config::load_client_config;
use congress_votes::features::settings::{Settings, SettingsStore};
use congress_votes::features::votes::{
    FetchError, HttpRelayClient, VoteAggregator, render_vote_table,
};

/// List recent Senate and House roll-call votes, newest first.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Congress number, e.g. 118
    #[arg(long)]
    congress: Option<u32>,
    /// Session within the congress (1 or 2)
    #[arg(long)]
    session: Option<u8>,
    /// Include House votes
    #[arg(long)]
    house: Option<bool>,
    /// Include Senate votes
    #[arg(long)]
    senate: Option<bool>,
    /// Relay base URL, overrides VOTES_RELAY_URL
    #[arg(long)]
    relay_url: Option<String>,
    /// Print votes as JSON
    #[arg(long)]
    json: bool,
    /// Remember the selection for next time
    #[arg(long)]
    save: bool,
}

impl Args {
    fn apply(&self, stored: Settings) -> Settings {
        Settings {
            congress: self.congress.unwrap_or(stored.congress),
            session: self.session.unwrap_or(stored.session),
            include_house: self.house.unwrap_or(stored.include_house),
            include_senate: self.senate.unwrap_or(stored.include_senate),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_client_config();

    let store = SettingsStore::open(&config.settings_path)
        .inspect_err(|error| warn!(%error, "settings unavailable, using defaults"))
        .ok();
    let stored = match &store {
        Some(store) => store.load().await,
        None => Settings::default(),
    };
    let settings = args.apply(stored);

    if args.save {
        settings.validate().map_err(FetchError::InvalidSettings)?;
        if let Some(store) = &store {
            store.save(&settings).await?;
        }
    }

    let relay_url = args.relay_url.clone().unwrap_or(config.relay_url);
    let client = HttpRelayClient::new(relay_url, config.disable_proxy, config.http_timeout_secs)?;
    let aggregator = VoteAggregator::new(Arc::new(client));

    let votes = aggregator.fetch_votes(&settings).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&votes)?);
    } else {
        print!("{}", render_vote_table(&votes));
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
