use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio chatbot: match questions to a knowledge base of intents")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base JSON file
    #[arg(long, global = true)]
    pub knowledge: Option<String>,

    /// Embedding provider: "tfidf", "ollama" or "onnx"
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Similarity a semantic match must exceed
    #[arg(long, global = true)]
    pub threshold: Option<f32>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single question
    Ask {
        /// Question text
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,

        /// Show how the reply was matched
        #[arg(long)]
        explain: bool,
    },

    /// Interactive chat over stdin
    Chat,

    /// List intents with example patterns
    Intents {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a knowledge base file
    Validate {
        /// Knowledge file (defaults to the configured one)
        path: Option<PathBuf>,
    },
}
