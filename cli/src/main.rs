//! Terminal host for theme sync.
//!
//! Every invocation is one page load against a cookie document kept in a
//! file, so `backdrop select fire` followed by `backdrop ready` behaves like
//! picking a theme and reloading the page.

mod file_store;
mod page;

use std::path::PathBuf;

use backdrop::{SyncConfig, Theme};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::file_store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] backdrop::SyncError),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "backdrop", about = "Persisted background theme, one page load per run")]
struct Cli {
    /// File holding the cookie document.
    #[arg(long, env = "BACKDROP_STORE", default_value = "backdrop.cookie")]
    store: PathBuf,

    /// Cookie key; defaults to `selectedTheme`.
    #[arg(long, env = "BACKDROP_COOKIE_KEY")]
    cookie_key: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log sync decisions at debug level on stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available themes.
    Themes,
    /// Load the page and print what it shows.
    Ready,
    /// Load the page, then pick a value in the theme selector.
    Select {
        /// Theme identifier; values outside the table are stored but show no theme.
        theme: String,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.cookie_key.as_deref() {
        Some(key) => SyncConfig::with_cookie_key(key)?,
        None => SyncConfig::default(),
    };

    match cli.command {
        Command::Themes => print_themes(cli.json),
        Command::Ready => {
            let store = FileStore::new(cli.store);
            tracing::debug!(path = %store.path().display(), "loading page");
            let display = page::run_page(config, store, None);
            print_display(&display, cli.json)
        }
        Command::Select { theme } => {
            let store = FileStore::new(cli.store);
            tracing::debug!(path = %store.path().display(), theme = %theme, "loading page and selecting theme");
            let display = page::run_page(config, store, Some(&theme));
            print_display(&display, cli.json)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_themes(json: bool) -> Result<(), CliError> {
    if json {
        let themes: Vec<_> = Theme::ALL
            .iter()
            .map(|theme| {
                serde_json::json!({
                    "id": theme.id(),
                    "label": theme.label(),
                    "background_url": theme.background_url(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&themes)?);
    } else {
        for theme in Theme::ALL {
            println!("{:<6} {:<6} {}", theme.id(), theme.label(), theme.background_url());
        }
    }
    Ok(())
}

fn print_display(display: &backdrop::DisplayState, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(display)?);
    } else {
        println!("{}", page::describe(display));
    }
    Ok(())
}
