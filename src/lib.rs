//! ManaBox to Card Kingdom collection converter.
//!
//! Reads a ManaBox collection CSV export, reshapes each row to the Card
//! Kingdom import schema (front-face card name, translated set name, foil
//! flag, quantity), and writes one CSV per rarity plus a combined file.

pub mod csv_processor;
pub mod models;
pub mod set_names;

// Re-export commonly used items
pub use csv_processor::rarity_writer::{collapse_triple_quotes, RarityRouter, COMBINED_FILE};
pub use csv_processor::CsvConverter;
pub use models::{ConversionSummary, ConverterConfig, ExportRow, Rarity};
pub use set_names::{normalize_set_name, SetNameTable, SET_NAME_RULES};
