//! CLI binary for lyrics-finder.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use lyrics_finder::{Settings, build_finder, init_tracing, output};
use lyrics_search::SiteSelection;

/// Find song lyrics on Genius and Tekstowo.
#[derive(Parser, Debug)]
#[command(name = "lyrics", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best-fitting song and its lyrics.
    Find(Query),

    /// List every song found, best fit first.
    FindAll(Query),
}

#[derive(Args, Debug)]
struct Query {
    /// Song title, optionally with the artist.
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,

    /// Search Genius only.
    #[arg(long, conflicts_with = "tekstowo_only")]
    genius_only: bool,

    /// Search Tekstowo only.
    #[arg(long)]
    tekstowo_only: bool,
}

impl Query {
    fn title(&self) -> String {
        self.title.join(" ")
    }

    fn selection(&self) -> SiteSelection {
        if self.genius_only {
            SiteSelection::genius_only()
        } else if self.tekstowo_only {
            SiteSelection::tekstowo_only()
        } else {
            SiteSelection::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    init_tracing(&settings.log_filter);
    tracing::debug!(config = ?cli.config, "settings loaded");

    let finder = build_finder(&settings)?;

    match &cli.command {
        Command::Find(query) => {
            let Some(song) = finder.find(&query.title(), query.selection()).await else {
                eprintln!("no lyrics found");
                return Ok(ExitCode::FAILURE);
            };
            if cli.json {
                println!("{}", output::to_json(&song)?);
            } else {
                println!("{}", output::render_song(&song));
            }
        }
        Command::FindAll(query) => {
            let songs = finder.find_all(&query.title(), query.selection()).await;
            if cli.json {
                println!("{}", output::to_json(&songs)?);
            } else if !songs.is_empty() {
                println!("{}", output::render_list(&songs));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
