//! chartview - command-line front door to the chart data layer
//!
//! One upstream operation per invocation; prints the mapped entities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chartview_common::config::Endpoints;
use chartview_data::ChartDataService;

/// Command-line arguments for chartview
#[derive(Parser, Debug)]
#[command(name = "chartview")]
#[command(about = "Query the chart viewer backends from the command line")]
#[command(version)]
struct Args {
    /// Graph-query service base URL (overrides env and config file)
    #[arg(long)]
    graph_url: Option<String>,

    /// Catalog service base URL (overrides env and config file)
    #[arg(long)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the chart published on a date (YYYY-MM-DD)
    Chart { date: String },
    /// Show the full detail of a song
    Song { id: String },
    /// Show the historical chart ranks of a song
    Ranks { id: String },
    /// Show the related media of a song
    Media { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let endpoints = Endpoints::resolve(args.graph_url.as_deref(), args.catalog_url.as_deref())?;
    info!(
        graph = %endpoints.graph_base,
        catalog = %endpoints.catalog_base,
        "Resolved endpoints"
    );

    let service = ChartDataService::new(&endpoints)?;

    match args.command {
        Command::Chart { date } => {
            for entry in service.chart(&date).await? {
                println!(
                    "{:>3}. {} - {} [{}]",
                    entry.position, entry.song_name, entry.artist_name, entry.song_id
                );
            }
        }
        Command::Song { id } => {
            let song = service.song_detail(&id).await?;
            println!("{} - {}", song.name, song.artist_name);
            println!("Album: {} ({})", song.album_name, song.album_release_date);
            println!("Duration: {}s", song.duration_seconds);
            println!("Stream: {}", song.stream_url);
            println!("Cover: {}", song.album_cover_url);
        }
        Command::Ranks { id } => {
            for ranking in service.song_rankings(&id).await? {
                println!("{}  #{}", ranking.date, ranking.rank);
            }
        }
        Command::Media { id } => {
            for item in service.song_media(&id).await? {
                println!("{} ({}) [thumb: {}]", item.url, item.caption, item.thumbnail_url);
            }
        }
    }

    Ok(())
}
