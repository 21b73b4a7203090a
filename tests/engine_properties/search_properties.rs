//! Search engine properties

use molten::{filter_with_query_string, parse_search_terms, Searchable};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Doc {
    index: usize,
    fields: Vec<String>,
}

impl Searchable for Doc {
    fn searchable_text(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

fn docs_strategy() -> impl Strategy<Value = Vec<Doc>> {
    proptest::collection::vec(proptest::collection::vec("[a-zA-Z ]{0,12}", 0..4), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, fields)| Doc { index, fields })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn empty_query_passes_everything_through(docs in docs_strategy(), query in "[ \t\n]{0,5}") {
        let result = filter_with_query_string(&docs, &query);
        let indices: Vec<_> = result.iter().map(|d| d.index).collect();
        let expected: Vec<_> = (0..docs.len()).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn unquoted_query_tokenizes_like_whitespace_split(query in "[a-z \t]{0,30}") {
        let expected: Vec<String> = query.split_whitespace().map(String::from).collect();
        prop_assert_eq!(parse_search_terms(&query), expected);
    }

    #[test]
    fn every_hit_contains_every_term(docs in docs_strategy(), query in "[a-zA-Z \"]{0,16}") {
        let terms: Vec<String> = parse_search_terms(&query)
            .into_iter()
            .map(|t| t.to_lowercase())
            .collect();
        let result = filter_with_query_string(&docs, &query);

        for doc in &result {
            let haystack = doc.fields.join(" ").to_lowercase();
            for term in &terms {
                prop_assert!(haystack.contains(term.as_str()));
            }
        }

        // Misses really miss
        let hit: Vec<usize> = result.iter().map(|d| d.index).collect();
        for doc in docs.iter().filter(|d| !hit.contains(&d.index)) {
            let haystack = doc.fields.join(" ").to_lowercase();
            prop_assert!(terms.iter().any(|t| !haystack.contains(t.as_str())));
        }
    }

    #[test]
    fn filtering_is_stable(docs in docs_strategy(), query in "[a-z]{0,2}") {
        let result = filter_with_query_string(&docs, &query);
        let indices: Vec<_> = result.iter().map(|d| d.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}
