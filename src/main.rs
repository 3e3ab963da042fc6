use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use castwords::config::Config;
use castwords::keywords::traits::DEFAULT_MAX_WORDS;
use castwords::output::terminal;
use castwords::pipeline::suggestions::DEFAULT_MODE;
use castwords::pipeline::Pipeline;

/// castwords: keyword and title suggestions for podcasts and audio dramas.
///
/// Pulls salient keywords out of free-form text and composes them into short
/// labeled phrases.
#[derive(Parser)]
#[command(name = "castwords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON web service
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides CASTWORDS_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides CASTWORDS_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate one batch of phrases for an option code
    Generate {
        /// Option code, e.g. 1word, 2word_podcasts, 3word_audio
        #[arg(long, default_value = "")]
        option: String,

        /// Mode string (accepted for parity with the web form; no effect)
        #[arg(long, default_value = "")]
        mode: String,

        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,
    },

    /// Mixed 1-3 word suggestions labeled with a mode
    Suggest {
        /// Label appended to each suggestion
        #[arg(long, default_value = DEFAULT_MODE)]
        mode: String,

        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,
    },

    /// Show the extracted keyword sequence
    Keywords {
        /// Maximum number of keywords (default: 50)
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max: usize,

        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,
    },

    /// Show which keyword strategy is active and where the model is looked up
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("castwords=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            let pipeline = Pipeline::from_config(&config)?;
            info!(strategy = pipeline.strategy_name(), "Pipeline ready");
            castwords::web::run_server(config, pipeline).await?;
        }

        Commands::Generate { option, mode, text } => {
            let text = read_input(text)?;
            let pipeline = Pipeline::from_config(&config)?;
            let result = pipeline.generate(&text, &option, &mode);
            let heading = if option.is_empty() {
                "Phrases".to_string()
            } else {
                format!("Phrases ({option})")
            };
            terminal::display_phrases(&heading, &text, &result);
        }

        Commands::Suggest { mode, text } => {
            let text = read_input(text)?;
            let pipeline = Pipeline::from_config(&config)?;
            let suggestions = pipeline.ai_suggestions(&text, &mode);
            terminal::display_phrases(&format!("Suggestions ({mode})"), &text, &suggestions);
        }

        Commands::Keywords { max, text } => {
            let text = read_input(text)?;
            let pipeline = Pipeline::from_config(&config)?;
            let keywords = pipeline.keywords(&text, max);
            terminal::display_keywords(&keywords, pipeline.strategy_name());
        }

        Commands::Status => {
            castwords::status::show(&config)?;
        }
    }

    Ok(())
}

/// Use the positional text if given, otherwise read all of stdin.
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
