use proptest::prelude::*;

use contact_map::{ContactField, MappingProfile, RowMapper};
use contact_model::{BorrowerStage, RawRow};

/// True if any field's keyword set (or the full-name set) would claim the
/// header, i.e. the header is not guaranteed to pass through.
fn header_is_claimable(header: &str) -> bool {
    let lowered = header.to_lowercase();
    let full_name = ["full name", "name"];
    ContactField::ALL
        .iter()
        .flat_map(|field| field.keywords().iter())
        .chain(full_name.iter())
        .any(|keyword| lowered.contains(keyword))
}

fn arbitrary_table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    let header = "[A-Za-z ]{1,12}";
    let cell = "[A-Za-z0-9 @.-]{0,16}";
    prop::collection::vec(header, 1..6).prop_flat_map(move |headers| {
        let width = headers.len();
        let rows = prop::collection::vec(prop::collection::vec(cell, width..=width), 0..12);
        (Just(headers), rows)
    })
}

proptest! {
    #[test]
    fn every_row_maps_to_exactly_one_record((headers, rows) in arbitrary_table()) {
        let mapper = RowMapper::new(MappingProfile::standard());
        let raw_rows: Vec<RawRow> = rows
            .iter()
            .map(|row| headers.iter().cloned().zip(row.iter().cloned()).collect())
            .collect();
        let records = mapper.map_rows(&raw_rows);
        prop_assert_eq!(records.len(), raw_rows.len());
    }

    #[test]
    fn validated_stage_is_always_enumerated(raw in ".*") {
        let stage = BorrowerStage::validate(&raw);
        prop_assert!(BorrowerStage::ALL.contains(&stage));
        prop_assert!(
            ["Active Lead", "Business Partner Only", "Prospect", "Client"]
                .contains(&stage.as_str())
        );
    }

    #[test]
    fn unclaimable_headers_always_pass_through(
        value in "[A-Za-z0-9 ]{0,12}",
        header in "[QXZ]{3,8}".prop_filter("must not match a keyword", |h| !header_is_claimable(h)),
    ) {
        let mapper = RowMapper::new(MappingProfile::standard());
        let row: RawRow = [(header.clone(), value.clone())].into_iter().collect();
        let record = mapper.map_row(&row);
        prop_assert_eq!(record.extras.get(&header), Some(&value));
    }
}
