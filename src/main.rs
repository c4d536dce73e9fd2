mod app;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use memory_game::oracle::OllamaOracle;
use memory_game::store::reset_topics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Spaced-repetition trainer with LLM-graded answers.
#[derive(Parser)]
#[command(name = "memgame", version)]
struct Args {
    /// Directory holding the topic files (*.json).
    #[arg(long, default_value = "topics")]
    topics_dir: PathBuf,

    /// Base URL of an OpenAI-compatible chat endpoint.
    #[arg(long, default_value = "http://localhost:11434/v1")]
    api_url: String,

    /// Model to grade answers with.
    #[arg(long, default_value = "llama3.2")]
    model: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Reset every topic: score 0, interval 1, last answered now.
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Reset) => {
            let count = reset_topics(&args.topics_dir, Utc::now())?;
            println!("Reset {count} topic file(s).");
            Ok(())
        }
        None => {
            let oracle = OllamaOracle::new(&args.api_url, &args.model);
            app::run(&args.topics_dir, &oracle)
        }
    }
}
