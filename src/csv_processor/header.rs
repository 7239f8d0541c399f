//! Case-insensitive header lookup for collection CSV files.
//!
//! ManaBox makes no promise about column order, so fields are resolved
//! by column name rather than by position.

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Columns every collection export must provide, in lowercase.
pub const REQUIRED_COLUMNS: &[&str] = &["name", "set name", "foil", "quantity", "rarity"];

/// Maps lowercased column names to their position in the header row.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Builds the index from a header record. When a column name appears
    /// twice the later occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_lowercase(), index))
            .collect();
        Self { columns }
    }

    /// Checks that every column in [`REQUIRED_COLUMNS`] is present.
    ///
    /// # Returns
    /// An error naming the first missing column, if any.
    pub fn validate_required(&self) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !self.columns.contains_key(*column) {
                bail!("required column `{column}` is missing from the input header");
            }
        }
        Ok(())
    }

    /// Looks up a field of `record` by column name.
    pub fn field<'a>(&self, record: &'a StringRecord, column: &str) -> Result<&'a str> {
        let index = self
            .columns
            .get(column)
            .with_context(|| format!("column `{column}` is missing from the input header"))?;
        record
            .get(*index)
            .with_context(|| format!("row has no field for column `{column}`"))
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
