//! Unit tests for per-row transforms.

use super::*;

fn default_index() -> HeaderIndex {
    HeaderIndex::from_headers(&StringRecord::from(vec![
        "Name", "Set Name", "Foil", "Rarity", "Quantity",
    ]))
}

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

mod clean_card_name_tests {
    use super::*;

    #[test]
    fn keeps_single_face_names() {
        assert_eq!(clean_card_name("Lightning Bolt"), "Lightning Bolt");
    }

    #[test]
    fn takes_the_front_face_of_split_cards() {
        assert_eq!(clean_card_name("Fire // Ice"), "Fire");
    }

    #[test]
    fn splits_on_the_first_separator_only() {
        assert_eq!(clean_card_name("Who // What // When"), "Who");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_card_name("  Lightning Bolt  "), "Lightning Bolt");
    }

    #[test]
    fn handles_empty_names() {
        assert_eq!(clean_card_name(""), "");
    }
}

mod foil_flag_tests {
    use super::*;

    #[test]
    fn normal_is_not_foil_in_any_casing() {
        assert_eq!(foil_flag("normal"), "0");
        assert_eq!(foil_flag("Normal"), "0");
        assert_eq!(foil_flag("NORMAL"), "0");
    }

    #[test]
    fn foil_finishes_map_to_one() {
        assert_eq!(foil_flag("foil"), "1");
        assert_eq!(foil_flag("etched"), "1");
    }

    #[test]
    fn empty_and_unknown_values_count_as_foil() {
        assert_eq!(foil_flag(""), "1");
        assert_eq!(foil_flag("glossy"), "1");
    }
}

mod rarity_tests {
    use crate::models::Rarity;

    #[test]
    fn classifies_named_tiers_case_insensitively() {
        assert_eq!(Rarity::classify("common"), Rarity::Common);
        assert_eq!(Rarity::classify("COMMON"), Rarity::Common);
        assert_eq!(Rarity::classify("Uncommon"), Rarity::Uncommon);
        assert_eq!(Rarity::classify("rare"), Rarity::Rare);
        assert_eq!(Rarity::classify("Mythic"), Rarity::Mythic);
    }

    #[test]
    fn unknown_tiers_land_in_other() {
        assert_eq!(Rarity::classify("special"), Rarity::Other);
        assert_eq!(Rarity::classify("token"), Rarity::Other);
        assert_eq!(Rarity::classify(""), Rarity::Other);
    }

    #[test]
    fn every_bucket_has_a_distinct_file() {
        let mut names: Vec<_> = Rarity::ALL.iter().map(|r| r.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Rarity::ALL.len());
    }
}

mod transform_row_tests {
    use super::*;

    #[test]
    fn builds_an_export_row_in_import_order() {
        let (row, rarity) = transform_row(
            &record(&["Lightning Bolt", "Fallout", "normal", "common", "4"]),
            &default_index(),
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(row.name, "\"Lightning Bolt\"");
        assert_eq!(row.set_name, "Universes Beyond: Fallout");
        assert_eq!(row.foil, "0");
        assert_eq!(row.quantity, "4");
        assert_eq!(rarity, Rarity::Common);
    }

    #[test]
    fn quotes_the_front_face_of_split_cards() {
        let (row, _) = transform_row(
            &record(&["Fire // Ice", "Apocalypse", "foil", "uncommon", "2"]),
            &default_index(),
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(row.name, "\"Fire\"");
        assert_eq!(row.foil, "1");
    }

    #[test]
    fn passes_quantity_through_verbatim() {
        let (row, _) = transform_row(
            &record(&["Lightning Bolt", "Bloomburrow", "normal", "common", "03"]),
            &default_index(),
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(row.quantity, "03");
    }

    #[test]
    fn leaves_unmatched_set_names_alone() {
        let (row, _) = transform_row(
            &record(&["Lightning Bolt", "Ravnica Remastered", "normal", "common", "1"]),
            &default_index(),
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(row.set_name, "Ravnica Remastered");
    }

    #[test]
    fn routes_unknown_rarities_to_other() {
        let (_, rarity) = transform_row(
            &record(&["Sol Ring", "Commander Anthology", "normal", "special", "1"]),
            &default_index(),
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(rarity, Rarity::Other);
    }

    #[test]
    fn reads_fields_by_name_not_position() {
        let index = HeaderIndex::from_headers(&StringRecord::from(vec![
            "Rarity", "Quantity", "Name", "Set Name", "Foil",
        ]));
        let (row, rarity) = transform_row(
            &record(&["mythic", "1", "Doubling Season", "Ravnica", "normal"]),
            &index,
            &SetNameTable::built_in(),
        )
        .unwrap();

        assert_eq!(row.name, "\"Doubling Season\"");
        assert_eq!(row.quantity, "1");
        assert_eq!(rarity, Rarity::Mythic);
    }

    #[test]
    fn fails_when_a_row_is_shorter_than_the_header() {
        let result = transform_row(
            &record(&["Lightning Bolt", "Fallout"]),
            &default_index(),
            &SetNameTable::built_in(),
        );
        assert!(result.is_err());
    }
}
