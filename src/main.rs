use anyhow::Context;
use clap::Parser;
use mmctl_channels::api::{Channel, HttpClient};
use mmctl_channels::channels::{resolve_channels, resolve_channels_concurrently};
use mmctl_channels::config::load_settings;
use mmctl_channels::logging::log_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Resolve channel arguments against a Mattermost server
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Channel ids or `team:channel-name` pairs
    #[arg(required = true, value_name = "CHANNEL")]
    channels: Vec<String>,

    /// Print the resolved channels as JSON
    #[arg(long)]
    json: bool,

    /// Lookups in flight at once (overrides MM_MAX_CONCURRENT_REQUESTS)
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Arguments::parse();

    let default_filter = if args.verbose {
        "mmctl_channels=debug"
    } else {
        "mmctl_channels=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            log_error("mmctl-channels", &*err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Arguments) -> anyhow::Result<ExitCode> {
    let settings = load_settings().context("failed to load settings")?;
    tracing::debug!(
        url = %settings.server.url,
        timeout_secs = settings.server.request_timeout_secs,
        "Configuration loaded"
    );

    let client = HttpClient::new(settings.server.clone()).context("failed to create client")?;

    let limit = args
        .concurrency
        .unwrap_or(settings.resolver.max_concurrent_requests);
    let (channels, summary) = if limit > 1 {
        resolve_channels_concurrently(&client, &args.channels, limit).await
    } else {
        resolve_channels(&client, &args.channels).await
    };

    if args.json {
        println!("{}", render_json(&channels)?);
    } else {
        for channel in &channels {
            println!("{}", format_channel(channel));
        }
    }

    match summary {
        Some(summary) => {
            eprint!("{}", summary);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn render_json(channels: &[Channel]) -> mmctl_channels::Result<String> {
    Ok(serde_json::to_string_pretty(channels)?)
}

fn format_channel(channel: &Channel) -> String {
    let mut line = format!(
        "{}\t{}\t{}\t{}",
        channel.id, channel.team_id, channel.name, channel.display_name
    );
    if channel.is_archived() {
        line.push_str(" (archived)");
    }
    line
}
