use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use moviedeck::api::{MovieId, NewMovie};
use moviedeck::app::App;
use moviedeck::catalog::{Action, CatalogState};
use moviedeck::config::Config;
use moviedeck::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "moviedeck", version, about = "Movie catalog client")]
struct Cli {
    /// Config file (default: ~/.config/moviedeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override api.base_url from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the movie list
    Movies,
    /// Load every genre
    Genres,
    /// Select a movie and load its genres
    Details { id: String },
    /// Create a movie and reload the list
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        poster: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        genre_id: Option<i64>,
    },
    /// Dispatch JSON actions read line by line from stdin
    Run {
        /// Print every state change as a JSON line
        #[arg(long)]
        watch: bool,
    },
}

/// Actions a one-shot command dispatches, in order.
fn command_actions(command: &Command) -> Vec<Action> {
    match command {
        Command::Movies => vec![Action::FetchMovies],
        Command::Genres => vec![Action::GenreList],
        Command::Details { id } => vec![
            Action::SelectedId(MovieId::new(id.as_str())),
            Action::fetch_genres(id.as_str()),
        ],
        Command::Add {
            title,
            poster,
            description,
            genre_id,
        } => {
            let movie = NewMovie::new(title.as_str(), poster.as_str(), description.as_str());
            let movie = match genre_id {
                Some(genre_id) => movie.with("genre_id", *genre_id),
                None => movie,
            };
            vec![Action::AddMovie(movie)]
        }
        Command::Run { .. } => Vec::new(),
    }
}

/// Parse one stdin line. Blank lines yield `None`.
fn parse_action_line(line: &str) -> Option<Result<Action, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("validating --base-url")?;
    }
    Ok(config)
}

fn print_state(state: &CatalogState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("serializing state")?;
    println!("{}", json);
    Ok(())
}

async fn run_stdin(app: &App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return Ok(());
            }
        };

        let Some(line) = line else {
            break;
        };

        match parse_action_line(&line) {
            None => {}
            Some(Ok(action)) => app.dispatch(action),
            Some(Err(err)) => {
                eprintln!("Skipping invalid action {:?}: {}", line, err);
            }
        }
    }

    settle(app).await;
    Ok(())
}

async fn settle(app: &App) {
    tokio::select! {
        _ = app.settle() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!(in_flight = app.effects().in_flight(), "Interrupted with effects still running");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let app = App::from_config(&config).context("building HTTP client")?;

    match &cli.command {
        Command::Run { watch } => {
            if *watch {
                app.store().subscribe(|state| match serde_json::to_string(state) {
                    Ok(json) => println!("{}", json),
                    Err(err) => tracing::warn!(error = %err, "Failed to serialize state"),
                });
            }
            run_stdin(&app).await?;
        }
        command => {
            for action in command_actions(command) {
                app.dispatch(action);
            }
            settle(&app).await;
        }
    }

    print_state(&app.state())
}
