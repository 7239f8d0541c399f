//! Pure per-row transforms from the ManaBox schema to the Card Kingdom schema.

use anyhow::Result;
use csv::StringRecord;
use log::debug;

use crate::models::{ExportRow, Rarity};
use crate::set_names::SetNameTable;

use super::header::HeaderIndex;

/// Cuts a split-face card name down to its front face.
///
/// # Arguments
/// * `raw_name` - The name as exported, e.g. "Fire // Ice"
///
/// # Returns
/// The front-face name with surrounding whitespace removed.
pub fn clean_card_name(raw_name: &str) -> String {
    let front = match raw_name.split_once("//") {
        Some((front, _)) => front,
        None => raw_name,
    };
    front.trim().to_string()
}

/// Maps the ManaBox foil column onto the Card Kingdom flag.
///
/// Exactly the value "normal" (any casing) is non-foil; every other
/// value, including an empty one, counts as foil.
pub fn foil_flag(raw_foil: &str) -> &'static str {
    if raw_foil.to_lowercase() == "normal" {
        "0"
    } else {
        "1"
    }
}

/// Reshapes one input record into an export row plus its rarity bucket.
///
/// The card name is wrapped in literal double quotes, matching the
/// always-quoted name field Card Kingdom's import expects. Quantity is
/// passed through verbatim.
pub fn transform_row(
    record: &StringRecord,
    header: &HeaderIndex,
    set_names: &SetNameTable,
) -> Result<(ExportRow, Rarity)> {
    let raw_name = header.field(record, "name")?;
    let name = format!("\"{}\"", clean_card_name(raw_name));
    let set_name = set_names.normalize(header.field(record, "set name")?);
    let foil = foil_flag(header.field(record, "foil")?).to_string();
    let quantity = header.field(record, "quantity")?.to_string();
    let rarity = Rarity::classify(header.field(record, "rarity")?);

    debug!("Transformed '{raw_name}' ({set_name}, {rarity:?})");

    Ok((
        ExportRow {
            name,
            set_name,
            foil,
            quantity,
        },
        rarity,
    ))
}

#[cfg(test)]
#[path = "row_transformer_tests.rs"]
mod tests;
