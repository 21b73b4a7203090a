//! Sort engine properties

use molten::{sort_catalog_items, CatalogRecord, CoeTable, RecordSortKey, SortKey};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        Just("Bullseye".to_string()),
        Just("bullseye".to_string()),
        Just("Effetre".to_string()),
        Just("Kugler".to_string()),
        Just("Acme".to_string()),
        "[A-Za-z0-9]{1,6}",
    ])
}

fn records_strategy() -> impl Strategy<Value = Vec<CatalogRecord>> {
    proptest::collection::vec((field(), field(), field()), 0..16).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, code, manufacturer))| CatalogRecord {
                id: Some(i.to_string()),
                name,
                code,
                manufacturer,
                ..CatalogRecord::default()
            })
            .collect()
    })
}

fn key_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Name),
        Just(SortKey::Code),
        Just(SortKey::Manufacturer),
    ]
}

fn ids(records: &[&CatalogRecord]) -> Vec<String> {
    records.iter().filter_map(|r| r.id.clone()).collect()
}

proptest! {
    #[test]
    fn blanks_never_precede_values(records in records_strategy(), key in key_strategy()) {
        let table = CoeTable::builtin();
        let sorted = sort_catalog_items(&records, key, &table);
        let blank: Vec<bool> = sorted
            .iter()
            .map(|r| RecordSortKey::new(*r, key, &table).is_blank())
            .collect();
        prop_assert!(blank.windows(2).all(|w| !(w[0] && !w[1])));
    }

    #[test]
    fn sorting_is_idempotent(records in records_strategy(), key in key_strategy()) {
        let table = CoeTable::builtin();
        let once = sort_catalog_items(&records, key, &table);
        let twice = sort_catalog_items(once.iter().copied(), key, &table);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn sorted_output_is_ordered_and_complete(records in records_strategy(), key in key_strategy()) {
        let table = CoeTable::builtin();
        let sorted = sort_catalog_items(&records, key, &table);
        prop_assert_eq!(sorted.len(), records.len());

        let keys: Vec<RecordSortKey> = sorted
            .iter()
            .map(|r| RecordSortKey::new(*r, key, &table))
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));

        let mut seen = ids(&sorted);
        seen.sort();
        let mut expected: Vec<String> = records.iter().filter_map(|r| r.id.clone()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn known_groups_precede_unknown(records in records_strategy()) {
        let table = CoeTable::builtin();
        let sorted = sort_catalog_items(&records, SortKey::Manufacturer, &table);
        let known: Vec<bool> = sorted
            .iter()
            .map(|r| r.manufacturer.as_deref().is_some_and(|m| table.coe_for(m).is_some()))
            .collect();
        prop_assert!(known.windows(2).all(|w| w[0] || !w[1]));
    }
}
