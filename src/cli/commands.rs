use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cardfolio - portfolio chat engine that answers visitor questions with
/// profile cards.
#[derive(Parser, Debug)]
#[command(name = "cardfolio")]
#[command(version = "0.1.0")]
#[command(about = "Answer portfolio questions with profile cards.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a visitor query and print the encoded transcript message
    Ask {
        /// The visitor's question
        query: String,

        /// Profile document to build cards from (overrides config)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Show how a query classifies without building cards
    Classify {
        /// The visitor's question
        query: String,

        /// Use the single-intent call instead of the multi-card one
        #[arg(long)]
        single: bool,
    },

    /// Start the HTTP gateway
    Gateway {
        /// Port to listen on (use 0 for a random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
}
