//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, Modes};
use crate::{GenerateOptions, HistoryFormat};

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(version)]
#[command(
    about = "Compose persona-driven prompts, send them to a generative text API, and keep a local history",
    long_about = None
)]
struct Cli {
    /// TOML file with API settings; environment variables take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate content for a prompt
    #[clap(visible_alias = "g")]
    Generate {
        /// Persona the model should adopt
        #[arg(short, long)]
        actor: String,
        /// Task description
        #[arg(short, long)]
        prompt: String,
        /// Input file whose content is attached to the prompt
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file; the result is printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Prompt store file; created if missing, prompts are persisted when given
        #[arg(short = 'f', long = "file")]
        store: Option<PathBuf>,
        /// Request detailed in-code comments
        #[arg(short, long)]
        comments: bool,
        /// Request documentation for the code and its dependencies
        #[arg(short, long)]
        documentation: bool,
        /// Request an explanation of the code and its usage
        #[arg(short, long)]
        explanations: bool,
    },
    /// List prompts kept in a prompt store
    #[clap(visible_alias = "h")]
    History {
        /// Prompt store file
        #[arg(short = 'f', long = "file")]
        store: PathBuf,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::domain::configuration::load_dotenv();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            actor,
            prompt,
            input,
            output,
            store,
            comments,
            documentation,
            explanations,
        } => run_generate(
            cli.config,
            GenerateOptions {
                actor,
                prompt,
                input,
                output,
                store,
                modes: Modes::new(comments, documentation, explanations),
            },
        ),
        Commands::History { store, json } => {
            let format = if json { HistoryFormat::Json } else { HistoryFormat::Text };
            crate::history(&store, format).map(|rendered| println!("{}", rendered))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(config: Option<PathBuf>, options: GenerateOptions) -> Result<(), AppError> {
    let outcome = crate::generate(config.as_deref(), &options)?;
    if outcome.written_to.is_none() {
        println!("{}", outcome.text);
    }
    Ok(())
}
