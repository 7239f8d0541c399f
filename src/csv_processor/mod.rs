//! CSV conversion pipeline from ManaBox exports to Card Kingdom imports.
//!
//! # Module Structure
//!
//! - [`header`] - Case-insensitive column lookup and required-column validation
//! - [`row_transformer`] - Pure per-row field transforms
//! - [`rarity_writer`] - Rarity-bucketed output files and quote repair
//!
//! # Example
//!
//! ```no_run
//! use manabox_converter::{ConverterConfig, CsvConverter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let summary = CsvConverter::new().process(&ConverterConfig::default())?;
//!     println!("{} rows converted", summary.rows);
//!     Ok(())
//! }
//! ```

pub mod header;
pub mod rarity_writer;
pub mod row_transformer;

use anyhow::{bail, Context, Result};
use log::{debug, info};

use crate::models::{ConversionSummary, ConverterConfig, Rarity};
use crate::set_names::SetNameTable;

use header::HeaderIndex;
use rarity_writer::RarityRouter;

/// Converts a ManaBox collection export into Card Kingdom import files.
pub struct CsvConverter {
    set_names: SetNameTable,
}

impl CsvConverter {
    /// Creates a converter using the built-in set name table.
    pub fn new() -> Self {
        Self::with_table(SetNameTable::built_in())
    }

    /// Creates a converter using a custom set name table.
    pub fn with_table(set_names: SetNameTable) -> Self {
        Self { set_names }
    }

    /// Runs the conversion described by `config`.
    ///
    /// Reads the input CSV, validates its header, and writes the five
    /// rarity files plus the combined file into the output directory.
    /// Nothing is written when the input file is missing or a required
    /// column is absent.
    ///
    /// # Returns
    /// Row counters for the completed run.
    pub fn process(&self, config: &ConverterConfig) -> Result<ConversionSummary> {
        let input = config.input_file.as_path();
        if !input.is_file() {
            bail!("input file `{}` does not exist", input.display());
        }

        info!("Loading collection from `{}`", input.display());
        let mut reader = csv::Reader::from_path(input)
            .with_context(|| format!("failed to open `{}`", input.display()))?;

        let header_index =
            HeaderIndex::from_headers(reader.headers().context("failed to read the CSV header")?);
        header_index.validate_required()?;

        let mut router = RarityRouter::create(&config.output_dir)?;
        let mut summary = ConversionSummary::default();

        for (index, record) in reader.records().enumerate() {
            // Data rows start on line 2, after the header.
            let record = record.with_context(|| format!("failed to read row on line {}", index + 2))?;
            let (row, rarity) =
                row_transformer::transform_row(&record, &header_index, &self.set_names)?;
            router.write(&row, rarity)?;
            summary.count(rarity);
        }

        router.finish()?;

        info!(
            "Converted {} rows from `{}` into `{}`",
            summary.rows,
            input.display(),
            config.output_dir.display()
        );
        for rarity in Rarity::ALL {
            debug!("{}: {} rows", rarity.file_name(), summary.bucket_rows(rarity));
        }

        Ok(summary)
    }
}

impl Default for CsvConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
