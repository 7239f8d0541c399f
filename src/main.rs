//! ManaBox to Card Kingdom converter CLI.
//!
//! Splits a ManaBox collection CSV export into per-rarity Card Kingdom
//! import files plus one combined file.

use clap::Parser;
use manabox_converter::{ConverterConfig, CsvConverter};
use std::path::PathBuf;

/// Converts a ManaBox collection CSV export into Card Kingdom import files
#[derive(Parser, Debug)]
#[command(name = "manabox_converter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ManaBox collection CSV export
    #[arg(short, long, default_value = "ManaBox_Collection.csv")]
    input: PathBuf,

    /// Directory the Card Kingdom import files are written to
    #[arg(short, long, default_value = "Manabox to Cardkingdom")]
    output_dir: PathBuf,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=debug, RUST_LOG=manabox_converter=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ConverterConfig {
        input_file: args.input,
        output_dir: args.output_dir,
    };

    match CsvConverter::new().process(&config) {
        Ok(summary) => {
            log::info!("{} rows converted", summary.rows);
            println!(
                "Processed '{}' and saved outputs in '{}'.",
                config.input_file.display(),
                config.output_dir.display()
            );
        }
        Err(e) => {
            log::error!("Conversion failed: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
