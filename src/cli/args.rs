// src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the collection document (optional)
    #[arg(short, long, value_name = "COLLECTION", global = true)]
    pub collection: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add, list, view, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Photograph a coin into the collection: prepare, identify, save
    Add {
        /// Path to the coin photo
        #[arg(value_name = "PHOTO")]
        image: PathBuf,

        /// Coin title/denomination; overrides the AI draft, required when
        /// analysis is skipped or fails
        #[arg(long)]
        title: Option<String>,

        /// Country of origin (left blank: "Unknown")
        #[arg(long)]
        country: Option<String>,

        /// Year of minting (left blank: "Unknown")
        #[arg(long)]
        year: Option<String>,

        /// Free-text description or historical note
        #[arg(long)]
        description: Option<String>,

        /// Metallic composition
        #[arg(long)]
        composition: Option<String>,

        /// Rough collector value range
        #[arg(long, value_name = "VALUE")]
        estimated_value: Option<String>,

        /// Skip AI identification and enter details manually
        #[arg(long)]
        skip_analysis: bool,
    },

    /// List coins with id, title, country and year
    List {
        /// Optional search term to filter by title or country
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// View a coin in the browser
    View {
        /// Coin ID to view
        #[arg(value_name = "COIN_ID")]
        coin_id: String,

        /// Output record as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Delete a coin from the collection
    Delete {
        /// Coin ID to delete
        #[arg(value_name = "COIN_ID")]
        coin_id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
