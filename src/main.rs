use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tubelist::config;
use tubelist::youtube::{self, HttpPageFetcher, LoadOptions, Playlist, TrackDescriptor};

#[derive(Debug, Parser)]
#[command(name = "tubelist", version, about = "Load full YouTube playlists page by page")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Data API key (overrides the config file).
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a playlist and print its tracks.
    Playlist {
        /// Playlist id, or a youtube.com link with `list=`.
        playlist: String,
        /// Video id to mark as selected (defaults to the link's `v=`).
        #[arg(long)]
        selected: Option<String>,
        /// Maximum pages to fetch, the first page included.
        #[arg(long)]
        max_pages: Option<u32>,
        /// Print the playlist as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change the config file.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the effective config.
    Show,
    /// Set the default page cap.
    SetMaxPages { count: u32 },
    /// Store a Data API key.
    SetApiKey { key: String },
    /// Remove the stored API key.
    ClearApiKey,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command {
        Command::Playlist {
            playlist,
            selected,
            max_pages,
            json,
        } => {
            let target = youtube::parse_playlist_ref(&playlist)
                .with_context(|| format!("no playlist id in {playlist:?}"))?;
            let selected = selected.or(target.video_id);

            if let Some(key) = cli.api_key {
                cfg.api.api_key = Some(key);
            }
            let options = LoadOptions {
                max_page_count: max_pages.unwrap_or(cfg.playlist.max_page_count),
            };

            let fetcher = HttpPageFetcher::new(&cfg.api)?;
            let playlist = youtube::load_playlist(
                &fetcher,
                &target.playlist_id,
                selected.as_deref(),
                options,
                &|t: TrackDescriptor| t,
            )
            .await
            .with_context(|| format!("load playlist {}", target.playlist_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&playlist)?);
            } else {
                print_playlist(&playlist);
            }
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Show => {
                let mut shown = cfg.clone();
                if shown.api.api_key.is_some() {
                    shown.api.api_key = Some("<set>".to_string());
                }
                print!("{}", toml::to_string_pretty(&shown).context("serialize config")?);
            }
            ConfigCommand::SetMaxPages { count } => {
                anyhow::ensure!(count > 0, "page cap must be at least 1");
                cfg.playlist.max_page_count = count;
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Updated max page count to {count}.");
            }
            ConfigCommand::SetApiKey { key } => {
                cfg.api.api_key = Some(key);
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Stored API key in config.");
            }
            ConfigCommand::ClearApiKey => {
                cfg.api.api_key = None;
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Cleared API key.");
            }
        },
    }

    Ok(())
}

fn print_playlist(playlist: &Playlist<TrackDescriptor>) {
    println!("{} ({} tracks)", playlist.name, playlist.tracks.len());
    for (i, t) in playlist.tracks.iter().enumerate() {
        let marker = if playlist.selected == Some(i) { '>' } else { ' ' };
        let author = if t.author.is_empty() {
            "".to_string()
        } else {
            format!(" - {}", t.author)
        };
        println!(
            "{marker}{:02}. {}{}  (video_id={})",
            i + 1,
            t.title,
            author,
            t.external_id
        );
    }
}
