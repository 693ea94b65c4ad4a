use crate::types::internal::{Bin, SearchHit, SearchQuery};

/// Case-insensitive substring scan of every item name in every bin
///
/// Results follow bin order, then item order within each bin. No ranking,
/// deduplication or paging.
pub fn search_bins(bins: &[Bin], query: &SearchQuery) -> Vec<SearchHit> {
    let needle = query.as_str();

    bins.iter()
        .flat_map(|bin| {
            bin.items
                .iter()
                .filter(move |item| item.name.to_lowercase().contains(needle))
                .map(move |item| SearchHit {
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                    item_quantity: item.quantity,
                    bin_id: bin.id.clone(),
                    bin_name: bin.name.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::Item;

    fn bin(id: &str, name: &str, items: &[(&str, &str, i64)]) -> Bin {
        let mut bin = Bin::new(id, name, "", 0);
        bin.items = items
            .iter()
            .map(|(item_id, item_name, quantity)| Item {
                id: item_id.to_string(),
                name: item_name.to_string(),
                quantity: *quantity,
            })
            .collect();
        bin
    }

    #[test]
    fn test_matches_case_insensitively() {
        let bins = vec![bin("b1", "Closet", &[("i1", "Red Scarf", 1)])];

        let hits = search_bins(&bins, &SearchQuery::from_validated("red"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_name, "Red Scarf");

        let hits = search_bins(&bins, &SearchQuery::from_validated("SCARF"));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_matches_inside_words() {
        let bins = vec![bin("b1", "Garage", &[("i1", "Sledgehammer", 1)])];

        let hits = search_bins(&bins, &SearchQuery::from_validated("ham"));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_orders_by_bin_then_item() {
        let bins = vec![
            bin("b2", "Attic", &[("i3", "Box tape", 1), ("i4", "Tape measure", 1)]),
            bin("b1", "Garage", &[("i1", "Duct tape", 3)]),
        ];

        let hits = search_bins(&bins, &SearchQuery::from_validated("tape"));
        let ids: Vec<&str> = hits.iter().map(|h| h.item_id.as_str()).collect();
        assert_eq!(ids, vec!["i3", "i4", "i1"]);
        assert_eq!(hits[2].bin_name, "Garage");
        assert_eq!(hits[2].item_quantity, 3);
    }

    #[test]
    fn test_same_name_in_two_bins_is_not_deduplicated() {
        let bins = vec![
            bin("b1", "Garage", &[("i1", "Hammer", 1)]),
            bin("b2", "Shed", &[("i2", "Hammer", 1)]),
        ];

        let hits = search_bins(&bins, &SearchQuery::from_validated("hammer"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_untrimmed_query_is_matched_literally() {
        let bins = vec![bin("b1", "Garage", &[("i1", "Hammer", 1)])];

        let hits = search_bins(&bins, &SearchQuery::from_validated("ham "));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_bins_no_hits() {
        let hits = search_bins(&[], &SearchQuery::from_validated("any"));
        assert!(hits.is_empty());
    }
}
