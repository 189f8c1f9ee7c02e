//! canasta - Market Basket Recommender CLI
//!
//! Usage:
//!   canasta catalog rules.json                          # List selectable products
//!   canasta recommend rules.json --item MILK            # Top-5 recommendations
//!   canasta recommend rules.json -i MILK -i BREAD -n 3  # Multi-item basket, top-3

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod loader;

use commands::{catalog, recommend};

/// canasta - recommendations from mined association rules
///
/// Reads a JSON array of mined rule rows and answers basket queries.
#[derive(Parser)]
#[command(name = "canasta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products selectable as basket items
    Catalog {
        /// Path to the rules JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Recommend products for a basket of selected items
    Recommend {
        /// Path to the rules JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selected product (repeat for a multi-item basket)
        #[arg(short, long = "item", value_name = "ITEM")]
        item: Vec<String>,

        /// Number of recommendations to return
        #[arg(short = 'n', long = "top-n", default_value_t = 5)]
        top_n: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog { file } => catalog::run(&file),
        Commands::Recommend { file, item, top_n } => recommend::run(&file, &item, top_n),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
