//! Rarity-bucketed CSV output.
//!
//! Each transformed row goes to exactly one rarity file and, in input
//! order, to the combined file. All six writers are opened before the
//! first row is written and closed on drop, so a failure midway through
//! a run still releases every handle.

use anyhow::{Context, Result};
use csv::Writer;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::models::{ExportRow, Rarity};

/// File holding every converted row, in input order.
pub const COMBINED_FILE: &str = "all_rarities.csv";

/// Routes export rows into per-rarity CSV files plus a combined file.
pub struct RarityRouter {
    buckets: HashMap<Rarity, Writer<File>>,
    combined: Writer<File>,
    paths: Vec<PathBuf>,
}

impl RarityRouter {
    /// Creates the output directory if absent and opens all six writers.
    ///
    /// Existing output files are truncated, so a rerun replaces the
    /// previous results in place.
    pub fn create(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory `{}`", output_dir.display())
        })?;

        let mut buckets = HashMap::new();
        let mut paths = Vec::new();
        for rarity in Rarity::ALL {
            let path = output_dir.join(rarity.file_name());
            buckets.insert(rarity, open_writer(&path)?);
            paths.push(path);
        }

        let combined_path = output_dir.join(COMBINED_FILE);
        let combined = open_writer(&combined_path)?;
        paths.push(combined_path);

        debug!(
            "Opened {} output files in `{}`",
            paths.len(),
            output_dir.display()
        );
        Ok(Self {
            buckets,
            combined,
            paths,
        })
    }

    /// Writes `row` to its rarity bucket and to the combined file.
    pub fn write(&mut self, row: &ExportRow, rarity: Rarity) -> Result<()> {
        let writer = self
            .buckets
            .get_mut(&rarity)
            .with_context(|| format!("no output bucket for rarity {rarity:?}"))?;
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row to `{}`", rarity.file_name()))?;
        self.combined
            .serialize(row)
            .context("failed to write row to the combined file")?;
        Ok(())
    }

    /// Flushes and closes every writer, then repairs the quote artifacts
    /// left by the pre-wrapped name field.
    pub fn finish(self) -> Result<()> {
        let Self {
            buckets,
            mut combined,
            paths,
        } = self;

        for (rarity, mut writer) in buckets {
            writer
                .flush()
                .with_context(|| format!("failed to flush `{}`", rarity.file_name()))?;
        }
        combined.flush().context("failed to flush the combined file")?;
        drop(combined);

        for path in &paths {
            fix_quote_artifacts(path)?;
        }

        info!("Wrote {} output files", paths.len());
        Ok(())
    }
}

fn open_writer(path: &Path) -> Result<Writer<File>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create output file `{}`", path.display()))
}

/// Collapses runs of three consecutive quote characters to one.
///
/// The name field reaches the writer already wrapped in literal quotes,
/// so the writer quotes it a second time and the serialized field starts
/// and ends with `"""`. Collapsing those runs leaves the field quoted
/// exactly once.
pub fn collapse_triple_quotes(data: &str) -> String {
    data.replace("\"\"\"", "\"")
}

fn fix_quote_artifacts(path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to re-read `{}` for quote repair", path.display()))?;
    let fixed = collapse_triple_quotes(&data);
    if fixed != data {
        fs::write(path, fixed)
            .with_context(|| format!("failed to rewrite `{}`", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "rarity_writer_tests.rs"]
mod tests;
