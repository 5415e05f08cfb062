use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kamus_config::Config;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod output;
pub mod repl;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;

use self::repl::Command;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "kamus", about = "Malay to Mandarin dictionary with LLM explanations")]
struct Cli {
    /// JSON config file. Without it, configuration comes from the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the built-in phrasebook and offline explanations
    #[arg(long)]
    offline: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Translate a Malay word and explain its Mandarin equivalent
    Lookup { word: String },
    /// Explain a Mandarin word directly
    Explain { word: String },
    /// Translate a sentence
    Sentence { text: String },
    /// Show cache size and state
    Stats,
    /// Interactive session (default)
    Repl,
}

impl CliCommand {
    fn into_repl_command(self) -> Option<Command> {
        match self {
            CliCommand::Lookup { word } => Some(Command::Lookup(word)),
            CliCommand::Explain { word } => Some(Command::Explain(word)),
            CliCommand::Sentence { text } => Some(Command::Sentence(text)),
            CliCommand::Stats => Some(Command::Stats),
            CliCommand::Repl => None,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kamus=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Ok(Config::from_json_file(path)?)
        }
        None => Ok(Config::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let state = AppState::new(config, cli.offline)?;

    match cli.command.and_then(CliCommand::into_repl_command) {
        Some(command) => {
            if let Some(text) = repl::execute(&state, command, cli.json).await? {
                println!("{text}");
            }
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();

            tokio::select! {
                result = repl::run(&state, stdin, &mut stdout, cli.json) => result?,
                _ = signal::ctrl_c() => {
                    tracing::info!("Shutdown requested");
                }
            }
        }
    }

    Ok(())
}
