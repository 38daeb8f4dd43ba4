//! Property-based tests for query decoding.

use proptest::prelude::*;
use server::query::{parse_query, FUNC_KEY};

fn is_index_key(key: &str) -> bool {
    key.parse::<u32>()
        .map(|n| n.to_string() == key && n != u32::MAX)
        .unwrap_or(false)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_arbitrary_queries_decode(query in ".{0,64}") {
        let q = parse_query(&query);
        prop_assert!(q.params.iter().all(|(k, _)| k != FUNC_KEY && !k.is_empty()));
    }

    #[test]
    fn prop_index_keys_come_first(keys in prop::collection::vec("[0-9a-c]{1,3}", 0..10)) {
        let query: Vec<String> = keys.iter().map(|k| format!("{k}=1")).collect();
        let q = parse_query(&query.join("&"));

        let first_other = q.params.iter().position(|(k, _)| !is_index_key(k));
        if let Some(split) = first_other {
            prop_assert!(q.params[split..].iter().all(|(k, _)| !is_index_key(k)));
        }
        let indices: Vec<u32> = q
            .params
            .iter()
            .filter_map(|(k, _)| is_index_key(k).then(|| k.parse().unwrap()))
            .collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}
