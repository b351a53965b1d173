//! CLI for conversational slide-deck generation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_genai::{ChatService, GroqClient, ProviderConfig};
use deck_pptx::PptxRenderer;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Generate PowerPoint decks from conversational requests.
#[derive(Parser, Debug)]
#[command(name = "deck-chat")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-shot: generate a deck from a single request and write it.
    Generate {
        /// The request, e.g. "Make a 3-slide deck about onboarding"
        message: String,

        /// Session id (default: a fresh UUID)
        #[arg(short, long)]
        session: Option<String>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the presentation JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: iterate on one deck across messages.
    Chat {
        /// Output directory for saved decks (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a saved presentation JSON file to a deck, offline.
    Render {
        /// Path to a presentation JSON file
        input: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Command::Generate {
            message,
            session,
            output,
            json,
        } => {
            let service = build_service()?;
            let session = session.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let reply = service
                .generate(&session, &message)
                .await
                .map_err(|e| anyhow::anyhow!("{e}"))?;

            println!("{}", reply.message);
            if json {
                println!("{}", serde_json::to_string_pretty(&reply.presentation_data)?);
            }

            let dir = ensure_output_dir(output.as_deref())?;
            let path = PptxRenderer::new()
                .write_deck(&reply.presentation_data, &dir)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Saved: {}", path.display());
        }
        Command::Chat { output } => {
            let service = build_service()?;
            let dir = ensure_output_dir(output.as_deref())?;
            run_chat(&service, &dir).await?;
        }
        Command::Render { input, output } => {
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("{} is not valid JSON", input.display()))?;
            let presentation =
                deck_core::validate(&value).map_err(|e| anyhow::anyhow!("{e}"))?;

            let dir = ensure_output_dir(output.as_deref())?;
            let path = PptxRenderer::new()
                .write_deck(&presentation, &dir)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}

/// Build the chat service from environment configuration.
fn build_service() -> Result<ChatService> {
    let config = ProviderConfig::from_env();
    if config.api_key.is_none() {
        anyhow::bail!("GROQ_API_KEY is not set");
    }
    let provider = GroqClient::new(config).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(ChatService::new(Arc::new(provider)))
}

/// Interactive loop over a single session.
async fn run_chat(service: &ChatService, output_dir: &Path) -> Result<()> {
    let session = uuid::Uuid::new_v4().to_string();
    let renderer = PptxRenderer::new();

    println!("Session {session}");
    println!("Describe the deck you want. Commands: /save /show /delete /quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" => break,
            "/save" => match service.conversation(&session).await {
                Ok(context) => match context.current_presentation() {
                    Some(presentation) => {
                        let path = renderer
                            .write_deck(presentation, output_dir)
                            .map_err(|e| anyhow::anyhow!("{e}"))?;
                        println!("Saved: {}", path.display());
                    }
                    None => println!("No presentation yet."),
                },
                Err(_) => println!("No presentation yet."),
            },
            "/show" => match service.conversation(&session).await {
                Ok(context) => match context.current_presentation() {
                    Some(p) => {
                        println!("{} ({} slides)", p.title, p.slide_count());
                        for (i, slide) in p.slides.iter().enumerate() {
                            println!("  {}. [{}] {}", i + 1, slide.layout.tag(), slide.title);
                        }
                    }
                    None => println!("No presentation yet."),
                },
                Err(_) => println!("No presentation yet."),
            },
            "/delete" => match service.delete(&session).await {
                Ok(()) => println!("Conversation deleted."),
                Err(e) => println!("{e}"),
            },
            message => match service.generate(&session, message).await {
                Ok(reply) => println!("{}", reply.message),
                Err(e) => {
                    log::debug!("generation failed: {e}");
                    println!("{}", e.public_message());
                }
            },
        }
    }

    Ok(())
}

/// Resolve and create the output directory.
fn ensure_output_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(dir)
}
