//! Code resolver properties

use molten::{extract_base_code, find_by_code, generate_preferred_code, CatalogRecord, LookupMode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn display_code_strips_back_to_base(
        code in "[A-Za-z0-9]{1,10}",
        manufacturer in "[A-Za-z][A-Za-z /]{0,15}",
    ) {
        let display = generate_preferred_code(&code, Some(&manufacturer));
        prop_assert_eq!(extract_base_code(&display), code.as_str());
    }

    #[test]
    fn blank_manufacturer_leaves_code_untouched(
        code in ".{0,12}",
        padding in "[ \t]{0,4}",
    ) {
        prop_assert_eq!(generate_preferred_code(&code, None), code.clone());
        prop_assert_eq!(generate_preferred_code(&code, Some(&padding)), code);
    }

    #[test]
    fn extract_without_dash_is_identity(code in "[^-]{0,12}") {
        prop_assert_eq!(extract_base_code(&code), code.as_str());
    }

    #[test]
    fn generated_display_code_resolves_to_its_record(
        codes in proptest::collection::vec("[0-9]{1,5}", 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let records: Vec<CatalogRecord> = codes
            .iter()
            .enumerate()
            .map(|(i, c)| CatalogRecord::new().with_id(i.to_string()).with_code(c.clone()).with_manufacturer("Effetre"))
            .collect();
        let target = &records[pick.index(records.len())];

        let found = find_by_code(&records, &target.display_code(), LookupMode::Exact);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().manufacturer.as_deref(), Some("Effetre"));

        // Lowercased prefix never resolves in exact mode
        let lowered = generate_preferred_code(target.code.as_deref().unwrap_or(""), Some("effetre"));
        prop_assert!(find_by_code(&records, &lowered, LookupMode::Exact).is_none());
    }
}
