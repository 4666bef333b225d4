use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wikirag::config::Config;
use wikirag::llm::OllamaClient;
use wikirag::output::{terminal, truncate_chars};
use wikirag::pipeline::ask;
use wikirag::topics::{CapitalizedWordExtractor, TopicExtractor};
use wikirag::wiki::{ContextSource, NoContext, WikiClient};

/// wikirag: Ask a question, ground the answer in Wikipedia.
///
/// Pulls a topic out of your question, fetches the matching Wikipedia
/// summary, and asks a local Ollama model to answer from that context.
#[derive(Parser)]
#[command(name = "wikirag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question using Wikipedia context
    Ask {
        /// The question (read from stdin when omitted)
        question: Vec<String>,

        /// Skip Wikipedia and ask the model directly
        #[arg(long)]
        no_context: bool,

        /// Print the prompt instead of calling the model
        #[arg(long)]
        dry_run: bool,

        /// Also print the retrieved context
        #[arg(long)]
        show_context: bool,
    },

    /// Show the topic extracted from a question
    Topic {
        /// The question to analyze
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Show the prompt built from a question and some context
    Prompt {
        /// The question to embed in the prompt
        #[arg(required = true)]
        question: Vec<String>,

        /// Context text to embed in the prompt
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Fetch the Wikipedia context for a topic
    Context {
        /// The topic to look up (e.g. Saturn)
        topic: String,
    },

    /// Run the built-in topic and prompt checks
    Selftest,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so stdout carries only output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wikirag=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            no_context,
            dry_run,
            show_context,
        } => {
            wikirag::selftest::run()?;

            let config = Config::load()?;
            let question = match join_question(&question) {
                Some(q) => q,
                None => read_question()?,
            };

            let extractor = CapitalizedWordExtractor::default();
            let wiki;
            let source: &dyn ContextSource = if no_context {
                &NoContext
            } else {
                wiki = WikiClient::new(&config.wiki_api_url)?;
                &wiki
            };

            if dry_run {
                let prepared =
                    ask::prepare(&question, &extractor, source, config.max_context_chars).await;
                terminal::display_prepared(&prepared);
                return Ok(());
            }

            config.require_model()?;
            let model = OllamaClient::new(&config.ollama_url, &config.model)
                .with_max_tokens(config.max_tokens);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .context("Invalid spinner template")?,
            );
            spinner.set_message(format!("Asking {}...", config.model));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = ask::run(
                &question,
                &extractor,
                source,
                &model,
                config.max_context_chars,
            )
            .await;
            spinner.finish_and_clear();

            let answer = result?;
            info!(
                topic = ?answer.topic,
                response_chars = answer.response.chars().count(),
                "Answered question"
            );
            terminal::display_answer(&answer, show_context);
        }

        Commands::Topic { question } => {
            let question = question.join(" ");
            let topic = CapitalizedWordExtractor::default().extract(&question);
            terminal::display_topic(topic.as_deref());
        }

        Commands::Prompt { question, context } => {
            let question = question.join(" ");
            println!("{}", wikirag::prompt::build_prompt(&question, &context));
        }

        Commands::Context { topic } => {
            let config = Config::load()?;
            let wiki = WikiClient::new(&config.wiki_api_url)?;
            match wiki.fetch_context(&topic).await? {
                Some(text) => println!("{}", truncate_chars(&text, config.max_context_chars)),
                None => println!("{}", format!("No matching wiki page found for {topic}.").yellow()),
            }
        }

        Commands::Selftest => {
            wikirag::selftest::run()?;
            println!("{}", "All checks passed.".green());
        }
    }

    Ok(())
}

/// Join positional words into a question, treating blank input as absent.
fn join_question(words: &[String]) -> Option<String> {
    let question = words.join(" ");
    if question.trim().is_empty() {
        None
    } else {
        Some(question)
    }
}

/// Prompt for a question on stdin.
fn read_question() -> Result<String> {
    print!("Question: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read question from stdin")?;

    let question = line.trim_end_matches(['\r', '\n']).to_string();
    if question.trim().is_empty() {
        anyhow::bail!("No question given. Pass one as an argument or type it at the prompt.");
    }
    Ok(question)
}
