use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use vocabulary::config::Config;
use vocabulary::corpus::{self, Source};
use vocabulary::output::terminal;
use vocabulary::TieBreak;

/// Vocabulary: word-frequency profiles with rank and relevance scoring.
///
/// Every text source is a file path, or `-` for stdin.
#[derive(Parser)]
#[command(name = "vocabulary", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the highest-ranked words of one or more texts
    Profile {
        /// Text sources to build the vocabulary from
        #[arg(required = true)]
        sources: Vec<String>,

        /// Number of words to show (default: VOCABULARY_TOP_N or 20)
        #[arg(long)]
        top: Option<usize>,

        /// Print the word counts as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Rank words against a corpus
    Rank {
        /// Text source to build the vocabulary from (repeatable)
        #[arg(long, required = true)]
        corpus: Vec<String>,

        /// Words to rank
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Sort the words of a text by their rank in a corpus
    Order {
        /// Text source to build the vocabulary from (repeatable)
        #[arg(long, required = true)]
        corpus: Vec<String>,

        /// Text whose words should be ordered
        text: String,

        /// Break rank ties alphabetically instead of by input order
        #[arg(long)]
        lexical: bool,
    },

    /// Compare two texts in both directions
    Relevance {
        /// First text source
        a: String,

        /// Second text source
        b: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocabulary=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Profile { sources, top, json } => {
            let vocabulary = corpus::load_all(&sources, config.strict)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&vocabulary.export())?);
            } else {
                terminal::display_profile(&vocabulary, top.unwrap_or(config.top_n));
            }
        }

        Commands::Rank {
            corpus: sources,
            words,
        } => {
            let vocabulary = corpus::load_all(&sources, config.strict)?;
            terminal::display_ranks(&vocabulary, &words);
        }

        Commands::Order {
            corpus: sources,
            text,
            lexical,
        } => {
            let vocabulary = corpus::load_all(&sources, config.strict)?;
            let tie_break = if lexical {
                TieBreak::Lexical
            } else {
                config.tie_break
            };
            let ordered = vocabulary.order_by(&text, tie_break);
            info!(words = ordered.len(), ?tie_break, "Ordered text");
            terminal::display_order(&vocabulary, &ordered);
        }

        Commands::Relevance { a, b } => {
            let source_a = Source::parse(&a);
            let source_b = Source::parse(&b);
            if source_a == Source::Stdin && source_b == Source::Stdin {
                anyhow::bail!("Only one of the two sources can be stdin.");
            }

            let vocab_a = corpus::load_source(&source_a, config.strict)?;
            let vocab_b = corpus::load_source(&source_b, config.strict)?;

            if vocab_a.is_empty() || vocab_b.is_empty() {
                println!(
                    "{}",
                    "One of the texts has no words; relevance is 0 by definition.".dimmed()
                );
            }

            terminal::display_relevance(&source_a.name(), &vocab_a, &source_b.name(), &vocab_b);
        }
    }

    Ok(())
}
