//! ArtDoc CLI - Command-line front end for the ArtDoc AI tools
//!
//! This CLI provides an `artdoc` command exposing document chat, the calculator,
//! the translator, the code interpreter, image interpretation and transcription.

mod commands;
mod output;

use anyhow::Context;
use artdoc_core::{AppConfig, ToolKit};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{calc, chat, code, config, image, transcribe, translate};
use output::Output;

/// ArtDoc CLI - AI tools for documents, code, images and audio
#[derive(Parser, Debug)]
#[command(
    name = "artdoc",
    author,
    version,
    about = "ArtDoc - AI tools for documents, code, images and audio",
    long_about = "ArtDoc sends your documents, code, images and recordings to a hosted generative model and prints a structured answer.\nSet ARTDOC_API_KEY (or GEMINI_API_KEY) before use."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Configuration file (merged over ~/.artdoc/config.toml and ./.artdocrc)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model to use (overrides configuration)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chat about a document
    ///
    /// Opens an interactive session. Type /history to show the conversation,
    /// /reset to clear it, /exit to leave.
    Chat {
        /// Document to chat about
        #[arg(short, long)]
        document: PathBuf,
    },

    /// Ask a single question about a document
    Ask {
        /// Document to ask about
        #[arg(short, long)]
        document: PathBuf,

        /// The question
        question: String,
    },

    /// Evaluate a calculation written in natural language
    Calc {
        /// Calculation or question (e.g. "15% of 80")
        query: String,
    },

    /// Translate text into another language
    Translate {
        /// Text to translate
        text: String,

        /// Target language (e.g. "es", "French")
        #[arg(short, long)]
        to: String,
    },

    /// Explain source code and suggest improvements
    Code {
        /// Source file, or "-" to read standard input
        file: String,
    },

    /// Explain the diagram in an image
    Diagram {
        /// Image file
        image: PathBuf,

        /// Custom prompt instead of the built-in diagram prompt
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Summarize the regions marked in red on a document image
    Find {
        /// Image file with red markings
        image: PathBuf,
    },

    /// Transcribe an audio recording
    Transcribe {
        /// Audio file
        audio: PathBuf,

        /// MIME type override (defaults to the file type, or audio/webm)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut app_config = AppConfig::load_unvalidated(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(ref model) = args.model {
        app_config.model = Some(model.clone());
    }
    if let Some(ref log_level) = args.log_level {
        app_config.log_level = Some(log_level.clone());
    }

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app_config.log_level()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // If no command provided, show help
    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let out = Output::new(args.json);

    // Built on demand so `config` works without a key; for every other command a
    // gateway that cannot authenticate is fatal before any request is made
    let toolkit = || -> anyhow::Result<ToolKit> {
        let toolkit = ToolKit::from_config(&app_config)?;
        tracing::debug!(?toolkit, "Tool kit ready");
        Ok(toolkit)
    };

    match command {
        Command::Config => config::execute(&app_config, &out),
        Command::Chat { document } => chat::execute(&toolkit()?, &document, &out).await,
        Command::Ask { document, question } => {
            chat::ask(&toolkit()?, &document, &question, &out).await
        }
        Command::Calc { query } => calc::execute(&toolkit()?, &query, &out).await,
        Command::Translate { text, to } => {
            translate::execute(&toolkit()?, &text, &to, &out).await
        }
        Command::Code { file } => code::execute(&toolkit()?, &file, &out).await,
        Command::Diagram { image, prompt } => {
            image::diagram(&toolkit()?, &image, prompt.as_deref(), &out).await
        }
        Command::Find { image } => image::find(&toolkit()?, &image, &out).await,
        Command::Transcribe { audio, mime } => {
            transcribe::execute(&toolkit()?, &audio, mime, &out).await
        }
    }
}
