//! CLI entrypoint for antingen-eller
//!
//! This is the presentation collaborator: it wires the infrastructure
//! adapters into the engine use cases and runs a minimal terminal loop.
//! All decision logic lives in the application layer; everything here is
//! rendering and input plumbing.

use anyhow::{Context, Result};
use clap::Parser;
use eller_application::{
    CastVoteError, CastVoteUseCase, GenerateQuestionUseCase, LoadHistoryUseCase,
    NextQuestionUseCase, QuestionStore,
};
use eller_domain::{Choice, History, Question, VoteTally};
use eller_infrastructure::{
    ConfigLoader, OpenAiGenerationGateway, PostgrestQuestionStore, STORE_URL_ENV,
    ThreadRngSource,
};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "antingen-eller", about = "Antingen eller — rösta på genererade frågor")]
struct Cli {
    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip configuration files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting antingen-eller");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // === Dependency Injection ===
    let store: Arc<dyn QuestionStore> = match &config.store.url {
        Some(url) => {
            let key = std::env::var(eller_infrastructure::STORE_KEY_ENV)
                .with_context(|| format!("set {}", eller_infrastructure::STORE_KEY_ENV))?;
            Arc::new(PostgrestQuestionStore::new(url.clone(), key))
        }
        None => Arc::new(
            PostgrestQuestionStore::from_env()
                .with_context(|| format!("set {STORE_URL_ENV} or [store].url"))?,
        ),
    };

    let mut gateway = OpenAiGenerationGateway::from_env()?;
    if let Some(api_url) = &config.generation.api_url {
        gateway = gateway.with_base_url(api_url.clone());
    }

    let generator =
        GenerateQuestionUseCase::new(Arc::new(gateway), config.generation_params());
    let load_history = LoadHistoryUseCase::new(store.clone());
    let next_question = NextQuestionUseCase::new(
        store.clone(),
        generator,
        Arc::new(ThreadRngSource),
        config.sourcing_params(),
    );
    let cast_vote = CastVoteUseCase::new(store.clone());

    println!();
    println!("=== Antingen eller ===");
    println!();

    // Rehydrate; a read failure degrades to an empty session with a manual
    // create action instead of retrying
    let mut history = match load_history.execute().await {
        Ok(history) => history,
        Err(e) => {
            warn!("Rehydration failed: {}", e);
            println!("Ingen fråga tillgänglig just nu.");
            History::new()
        }
    };

    render_current(&history);
    print_help();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" => break,
            "n" => {
                let outcome = next_question.execute(history).await;
                history = outcome.history;
                render_current(&history);
            }
            "h" => render_history(&history),
            choice @ ("1" | "2") => {
                let choice: Choice = choice.parse().expect("checked by match");
                match cast_vote.execute(history.clone(), choice) {
                    Ok(outcome) => {
                        history = outcome.history;
                        // Fire-and-forget: the handle is dropped, the write
                        // finishes (or fails and is logged) in the background
                        drop(outcome.persistence);
                        if let Some(current) = history.current() {
                            render_stats(current);
                        }
                    }
                    Err(CastVoteError::NoCurrentQuestion) => {
                        println!("Ingen fråga att rösta på — tryck 'n' för att skapa en.");
                    }
                }
            }
            "" => {}
            _ => print_help(),
        }
    }

    Ok(())
}

fn render_current(history: &History) {
    println!();
    match history.current() {
        Some(question) => {
            println!("  {}", question.option1);
            println!("      ELLER");
            println!("  {}", question.option2);
        }
        None => {
            println!("  Ingen fråga tillgänglig — tryck 'n' för att skapa den första frågan.");
        }
    }
    println!();
}

fn render_stats(question: &Question) {
    let tally = VoteTally::for_question(question);
    println!();
    println!(
        "  Alternativ 1: {}%   Alternativ 2: {}%   ({} röster)",
        tally.percentage1,
        tally.percentage2,
        question.total_votes()
    );
    println!();
}

fn render_history(history: &History) {
    if history.previous().is_empty() {
        println!("Inga tidigare frågor.");
        return;
    }
    println!();
    println!("Tidigare frågor:");
    for question in history.previous() {
        let tally = VoteTally::for_question(question);
        println!(
            "  1: {}  /  2: {}  — {}% / {}%",
            question.option1, question.option2, tally.percentage1, tally.percentage2
        );
    }
    println!();
}

fn print_help() {
    println!("[1]/[2] rösta   [n] nästa fråga   [h] historik   [q] avsluta");
}
