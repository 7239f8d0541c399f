//! ManaBox to Card Kingdom set name translation.
//!
//! ManaBox decorates set names differently than Card Kingdom expects
//! (extra words, missing "Universes Beyond:" prefixes, "Commander" vs
//! "Commander Decks"), but each affected set carries a stable identifying
//! substring. The table below maps those substrings onto the exact Card
//! Kingdom name.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Ordered substring rules mapping ManaBox set names to Card Kingdom names.
///
/// The first matching pattern wins, so more specific patterns must stay
/// above more general ones. Patterns are matched against the lowercased
/// set name.
pub const SET_NAME_RULES: &[(&str, &str)] = &[
    ("crimson vow commander", "Innistrad: Crimson Vow Commander Decks"),
    (
        "tales of middle-earth commander",
        "The Lord of the Rings: Tales of Middle-earth Commander Decks",
    ),
    ("modern horizons 3 commander", "Modern Horizons 3 Commander Decks"),
    (
        "outlaws of thunder junction commander",
        "Outlaws Of Thunder Junction Commander Decks",
    ),
    ("fallout", "Universes Beyond: Fallout"),
    ("doctor who", "Universes Beyond: Doctor Who"),
    ("assassin's creed", "Universes Beyond: Assassin's Creed"),
    ("warhammer 40,000 commander", "Universes Beyond: Warhammer 40,000"),
    (
        "murders at karlov manor commander",
        "Murders at Karlov Manor Commander Decks",
    ),
    ("wilds of eldraine commander", "Wilds of Eldraine Commander Decks"),
    ("dominaria united commander", "Dominaria United Commander Decks"),
];

lazy_static! {
    static ref BUILT_IN_TABLE: SetNameTable = SetNameTable::from_rules(SET_NAME_RULES)
        .expect("built-in set name rules must compile");
}

/// Compiled, ordered lookup table for set name translation.
#[derive(Debug, Clone)]
pub struct SetNameTable {
    rules: Vec<(Regex, String)>,
}

impl SetNameTable {
    /// Compiles an ordered rule list into a table.
    ///
    /// # Arguments
    /// * `rules` - `(pattern, replacement)` pairs; patterns are regex
    ///   searches applied to the lowercased set name, in list order
    ///
    /// # Returns
    /// The compiled table, or the first pattern compilation error.
    pub fn from_rules(rules: &[(&str, &str)]) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (pattern, replacement) in rules {
            compiled.push((Regex::new(pattern)?, (*replacement).to_string()));
        }
        Ok(Self { rules: compiled })
    }

    /// Returns the table compiled from [`SET_NAME_RULES`].
    pub fn built_in() -> Self {
        BUILT_IN_TABLE.clone()
    }

    /// Maps a ManaBox set name onto the Card Kingdom name.
    ///
    /// The first rule whose pattern occurs anywhere in the lowercased
    /// name wins. Names matching no rule are returned unchanged, in
    /// their original casing.
    pub fn normalize(&self, set_name: &str) -> String {
        let lowered = set_name.to_lowercase();
        for (pattern, replacement) in &self.rules {
            if pattern.is_match(&lowered) {
                debug!("Set name '{set_name}' matched '{pattern}' -> '{replacement}'");
                return replacement.clone();
            }
        }
        set_name.to_string()
    }
}

impl Default for SetNameTable {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Normalizes a set name with the built-in rule table.
pub fn normalize_set_name(set_name: &str) -> String {
    BUILT_IN_TABLE.normalize(set_name)
}
