//! Index map-key conversion and serde tests
//!
//! Exercises the string-keyed <-> index-keyed map helpers and the textual
//! serde form, including indexes beyond machine-word range.

use graph_store_core::error::Error;
use graph_store_core::Index;
use num_bigint::BigUint;
use std::collections::HashMap;

/// Generate a spread of index values: single-segment, multi-segment, and
/// segments wider than any machine word.
fn generate_test_indexes(count: usize) -> Vec<Index> {
    (0..count)
        .map(|i| {
            let depth = i % 4 + 1;
            let values = (0..depth)
                .map(|d| BigUint::from(u64::MAX) * (i as u64 + 1) + (d as u64))
                .collect();
            Index::from_values(values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip_batch() {
        for idx in generate_test_indexes(40) {
            let rendered = idx.canonical_string();
            assert_eq!(Index::parse(&rendered), Some(idx));
        }
    }

    #[test]
    fn test_map_conversion_round_trip() {
        let original = HashMap::from([
            ("1".to_string(), "first"),
            ("/2/3".to_string(), "second"),
        ]);

        let typed = Index::map_from_string_keys(original.clone()).unwrap();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed.get(&Index::single(1u32)), Some(&"first"));

        let back = Index::map_to_string_keys(typed);
        assert_eq!(back, original);
    }

    #[test]
    fn test_map_conversion_fails_atomically() {
        let dict = HashMap::from([
            ("1".to_string(), 1),
            ("not-an-index".to_string(), 2),
            ("/2/3".to_string(), 3),
        ]);

        let err = Index::map_from_string_keys(dict).unwrap_err();
        match err {
            Error::InvalidIndex(msg) => assert!(msg.contains("not-an-index")),
            other => panic!("expected InvalidIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_as_string_value() {
        let idx = Index::parse("/1/23/456").unwrap();
        let json = serde_json::to_value(&idx).unwrap();
        assert_eq!(json, serde_json::json!("/1/23/456"));

        let back: Index = serde_json::from_value(json).unwrap();
        assert_eq!(back, idx);
    }

    #[test]
    fn test_serde_as_map_key() {
        let map: HashMap<Index, u32> = HashMap::from([
            (Index::single(7u32), 1),
            (Index::parse("/8/9").unwrap(), 2),
        ]);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["7"], 1);
        assert_eq!(json["/8/9"], 2);

        let back: HashMap<Index, u32> = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_serde_rejects_bad_string() {
        let result: Result<Index, _> = serde_json::from_value(serde_json::json!("/1//2"));
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_indexes_order_by_time() {
        let earlier = Index::now();
        let later = Index::from_timestamp(chrono::Utc::now() + chrono::Duration::seconds(5));
        assert!(earlier < later);
    }
}
