mod logging;
mod stats;
mod view;

use clap::{Parser, Subcommand};
use pocodec::Catalog;
use pocodec_cli::{
    backend::HttpTranslator,
    config::{Config, DEFAULT_CONFIG_PATH},
    process::process_all,
    validation::{validate_file_path, validate_po_extension},
};
use tracing::info;

use crate::{stats::print_stats, view::print_view};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log parsing and translation progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate every catalog listed in the configuration file.
    Translate {
        /// Path to the YAML configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: String,

        /// Replace each original file with its translated output
        #[arg(long)]
        rewrite: bool,
    },

    /// View the messages of a PO file.
    View {
        /// The input file to view
        #[arg(short, long)]
        input: String,

        /// Display full values without truncation
        #[arg(long)]
        full: bool,
    },

    /// Show translation progress of a PO file.
    Stats {
        /// The input file to inspect
        #[arg(short, long)]
        input: String,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn read_catalog(input: &str) -> Catalog {
    if let Err(e) = validate_file_path(input).and_then(|_| validate_po_extension(input)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    match <Catalog as pocodec::Parser>::read_from(input) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error reading {}: {}", input, e);
            std::process::exit(1);
        }
    }
}

fn run_translate(config_path: &str, rewrite: bool) {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let translator = match HttpTranslator::chunked(&config.backend) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "translating {} file(s) through {}",
        config.files.len(),
        translator.inner().endpoint()
    );

    let summary = process_all(&config.files, &translator, &config.source_lang, rewrite);
    if !summary.is_success() {
        eprintln!(
            "{} of {} file(s) failed",
            summary.failed.len(),
            config.files.len()
        );
        std::process::exit(1);
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.commands {
        Commands::Translate { config, rewrite } => run_translate(&config, rewrite),
        Commands::View { input, full } => print_view(&read_catalog(&input), full),
        Commands::Stats { input, json } => print_stats(&read_catalog(&input), json),
    }
}
