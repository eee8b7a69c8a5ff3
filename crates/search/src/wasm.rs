//! WASM bindings for client-side matching and ranking.

use crate::types::CatalogItem;
use wasm_bindgen::prelude::*;

/// Case-insensitive Levenshtein distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

/// Check whether `query` approximately occurs in `text`.
#[wasm_bindgen]
pub fn fuzzy_match(query: &str, text: &str, threshold: usize) -> bool {
    crate::fuzzy_match(query, text, threshold)
}

/// Relevance score of a single JSON-encoded catalog item.
///
/// Returns 0 when the item cannot be parsed.
#[wasm_bindgen]
pub fn relevance_score(query: &str, item_json: &str) -> f64 {
    serde_json::from_str::<CatalogItem>(item_json)
        .map(|item| crate::score(&item, query))
        .unwrap_or(0.0)
}

/// Rank catalog items and return the results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of catalog items
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of `{ item, score, breakdown }`, best first
#[wasm_bindgen]
pub fn rank_items(query: &str, items_json: &str, max_results: usize) -> String {
    rank_json(query, items_json, max_results).unwrap_or_else(|_| "[]".to_string())
}

fn rank_json(query: &str, items_json: &str, max_results: usize) -> crate::Result<String> {
    let items: Vec<CatalogItem> = serde_json::from_str(items_json)?;

    let mut results = crate::rank(items, query.trim());
    if max_results > 0 {
        results.truncate(max_results);
    }

    Ok(serde_json::to_string(&results)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"[
        {"id": "1", "title": "Singing Bowl", "description": "hand hammered bronze",
         "isActive": true, "verificationStatus": "approved", "weightedRating": 5.0},
        {"id": "2", "title": "Nepali Pashmina Scarf", "description": "soft wool",
         "isActive": true, "verificationStatus": "approved", "weightedRating": 4.0}
    ]"#;

    #[test]
    fn test_rank_items_json() {
        let ranked: serde_json::Value = serde_json::from_str(&rank_items("scarf", ITEMS, 1)).unwrap();
        assert_eq!(ranked.as_array().map(Vec::len), Some(1));
        assert_eq!(ranked[0]["item"]["id"], "2");
    }

    #[test]
    fn test_bad_json_degrades() {
        assert_eq!(rank_items("scarf", "{ not json", 0), "[]");
        assert_eq!(relevance_score("scarf", "nope"), 0.0);
    }

    #[test]
    fn test_matcher_wrappers() {
        assert_eq!(edit_distance("Kitten", "sitting"), 3);
        assert!(fuzzy_match("pashmnia", "Nepali Pashmina Scarf", 2));
    }
}
